use crate::auth::AuthState;
use crate::base::DirectAdminClient;
use crate::endpoints::Action;
use anyhow::Result;

// File operations are available in any auth state: the original client never
// gated them on login, and an unauthenticated call simply comes back with the
// panel's login page as the body.
impl<A: AuthState> DirectAdminClient<A> {
    /// Write `contents` to `file_path` through the panel file manager,
    /// creating the file when it does not exist.
    pub async fn write_file(
        &self,
        file_path: &str,
        contents: impl Into<String>,
    ) -> Result<String> {
        let (dir, name) = split_path(file_path);
        let fields = [
            ("action".to_owned(), "edit".to_owned()),
            ("path".to_owned(), dir.to_owned()),
            ("filename".to_owned(), name.to_owned()),
            ("text".to_owned(), contents.into()),
        ];
        self.send_form(&Action::FileManager.to_string(), &fields)
            .await
    }

    /// Fetch `file_path` (or a directory listing) as raw text.
    ///
    /// The path rides directly on the action name; the leading slash of an
    /// absolute path is the only separator.
    pub async fn read_file(&self, file_path: &str) -> Result<String> {
        let action = format!("{}{}", Action::FileManager, file_path);
        self.send_form(&action, &[]).await
    }
}

/// Directory and basename of a `/`-separated server-side path.
fn split_path(file_path: &str) -> (&str, &str) {
    match file_path.rsplit_once('/') {
        Some(("", name)) => ("/", name),
        Some((dir, name)) => (dir, name),
        None => (".", file_path),
    }
}
