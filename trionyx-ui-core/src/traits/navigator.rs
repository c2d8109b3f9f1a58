/// Host page navigation.
pub trait Navigator: Send + Sync {
    /// Path of the page currently shown (key of the persisted panel mapping).
    fn current_path(&self) -> String;

    /// Leave the current page for `url`.
    ///
    /// Called with the dialog state locked; must not call back into a controller.
    fn navigate(&self, url: &str);
}
