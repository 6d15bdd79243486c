///
/// User visible, short lived message sink.
///
#[cfg_attr(test, mockall::automock)]
pub trait ToastService: Send + Sync {
    fn success(&self, message: &str);

    fn error(&self, message: &str);
}
