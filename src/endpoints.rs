//! The panel action names consumed by this client.

use strum_macros::Display;

/// Server-side command endpoint, appended to the panel base URL as-is.
///
/// `FileManager` takes the target path concatenated directly onto the action
/// name; the other two are used bare.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum Action {
    #[strum(serialize = "CMD_LOGIN")]
    Login,
    #[strum(serialize = "CMD_DOMAIN_POINTER")]
    DomainPointer,
    #[strum(serialize = "CMD_FILE_MANAGER")]
    FileManager,
}
