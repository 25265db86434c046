/// Visibility of the contact modal. Owned by the page, never by the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    Close,
}

/// Ways the user can dismiss the modal. All of them close it the same way;
/// the reason is only kept for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Backdrop,
    EscapeKey,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn apply(self, event: ModalEvent) -> Self {
        match event {
            ModalEvent::Open => Self::Open,
            ModalEvent::Close => Self::Closed,
        }
    }
}

impl From<DismissReason> for ModalEvent {
    fn from(_: DismissReason) -> Self {
        ModalEvent::Close
    }
}
