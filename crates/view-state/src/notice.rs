//! Single-slot error notice

/// The one error message shown to the user
///
/// A new message replaces the current one; there is no queue. An empty
/// message is the only "no error" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    message: String,
}

impl Notice {
    pub fn raise(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn dismiss(&mut self) {
        self.message.clear();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_message_overwrites() {
        let mut notice = Notice::default();
        notice.raise("first");
        notice.raise("second");
        assert_eq!(notice.message(), "second");

        notice.dismiss();
        assert_eq!(notice.message(), "");
    }
}
