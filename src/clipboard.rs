//! Best-effort copying of the displayed link.

use snafu::Snafu;

use crate::BoxedError;

/// Feedback shown briefly after a successful copy.
pub const COPIED_FEEDBACK: &str = "Copied!";

/// Notice shown to the user when copying fails.
pub const COPY_FAILED_NOTICE: &str = "Failed to copy link. Please copy it manually.";

/// A destination for copied text.
pub trait Clipboard {
    /// The error returned by the backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not store the text.
    fn set_text(&mut self, text: &str) -> Result<(), Self::Error>;
}

impl<C: Clipboard + ?Sized> Clipboard for &mut C {
    type Error = C::Error;

    fn set_text(&mut self, text: &str) -> Result<(), Self::Error> {
        (**self).set_text(text)
    }
}

/// Errors from copying the link.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ClipboardError {
    /// The clipboard backend rejected the copy.
    #[snafu(display("Failed to copy link. Please copy it manually."))]
    ClipboardCopyFailed {
        /// The backend error.
        source: BoxedError,
    },
}

#[cfg(feature = "clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "clipboard")]
mod system {
    use super::Clipboard;

    /// The operating system clipboard, opened on first use.
    ///
    /// On Linux the copied text is owned by this handle and disappears when
    /// it is dropped, unless a clipboard manager has taken it over. A handle
    /// created with [`SystemClipboard::handing_off`] blocks in `set_text`
    /// until another application owns the contents, which a process about
    /// to exit needs.
    #[derive(Default)]
    pub struct SystemClipboard {
        inner: Option<arboard::Clipboard>,
        hand_off: bool,
    }

    impl SystemClipboard {
        /// Creates a handle without touching the system clipboard yet.
        ///
        /// Keep it alive for as long as the copied text should stay available.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a handle whose copies outlive it.
        #[must_use]
        pub fn handing_off() -> Self {
            Self {
                inner: None,
                hand_off: true,
            }
        }

        /// Returns true if copies wait for another owner to take over.
        #[must_use]
        pub fn hands_off(&self) -> bool {
            self.hand_off
        }
    }

    impl std::fmt::Debug for SystemClipboard {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SystemClipboard")
                .field("open", &self.inner.is_some())
                .field("hand_off", &self.hand_off)
                .finish()
        }
    }

    impl Clipboard for SystemClipboard {
        type Error = arboard::Error;

        fn set_text(&mut self, text: &str) -> Result<(), Self::Error> {
            let clipboard = match self.inner.take() {
                Some(clipboard) => clipboard,
                None => arboard::Clipboard::new()?,
            };
            let clipboard = self.inner.insert(clipboard);

            #[cfg(all(
                unix,
                not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
            ))]
            if self.hand_off {
                use arboard::SetExtLinux as _;

                tracing::debug!("waiting for another application to take the clipboard");
                return clipboard.set().wait().text(text);
            }
            clipboard.set_text(text)
        }
    }

}

#[cfg(not(feature = "clipboard"))]
pub use unavailable::{ClipboardUnavailable, SystemClipboard};

#[cfg(not(feature = "clipboard"))]
mod unavailable {
    use snafu::Snafu;

    use super::Clipboard;

    /// The crate was built without clipboard support.
    #[derive(Debug, Snafu)]
    #[snafu(display("Clipboard support is not enabled in this build"))]
    pub struct ClipboardUnavailable;

    /// Stand-in clipboard used when the `clipboard` feature is disabled.
    #[derive(Debug, Default)]
    pub struct SystemClipboard;

    impl SystemClipboard {
        /// Creates the stand-in clipboard.
        #[must_use]
        pub fn new() -> Self {
            Self
        }

        /// Creates the stand-in clipboard.
        #[must_use]
        pub fn handing_off() -> Self {
            Self
        }
    }

    impl Clipboard for SystemClipboard {
        type Error = ClipboardUnavailable;

        fn set_text(&mut self, _text: &str) -> Result<(), Self::Error> {
            Err(ClipboardUnavailable)
        }
    }
}
