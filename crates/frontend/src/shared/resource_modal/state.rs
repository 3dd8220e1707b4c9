use crate::shared::crud::SaveTarget;
use contracts::domain::common::Resource;
use contracts::shared::form::{FieldErrors, FormDraft, FormModel, ImagePolicy};
use contracts::shared::metadata::FieldKind;

/// A validated payload on its way to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest<Id, P> {
    pub target: SaveTarget<Id>,
    pub payload: P,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<Id> {
    pub target: SaveTarget<Id>,
    pub draft: FormDraft,
    pub errors: FieldErrors,
    /// A save is in flight; inputs are disabled and further saves ignored.
    pub saving: bool,
    /// Last backend failure, shown inside the modal.
    pub save_error: Option<String>,
}

impl<Id> EditSession<Id> {
    pub fn is_create(&self) -> bool {
        matches!(self.target, SaveTarget::Create)
    }
}

/// Create/edit dialog lifecycle for one resource kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalMachine<Id> {
    Closed,
    Editing(EditSession<Id>),
}

impl<Id> Default for ModalMachine<Id> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<Id: Copy> ModalMachine<Id> {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn session(&self) -> Option<&EditSession<Id>> {
        match self {
            Self::Editing(session) => Some(session),
            Self::Closed => None,
        }
    }

    fn session_mut(&mut self) -> Option<&mut EditSession<Id>> {
        match self {
            Self::Editing(session) => Some(session),
            Self::Closed => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.session().is_some_and(|s| s.saving)
    }

    pub fn value(&self, key: &str) -> String {
        self.session()
            .map(|s| s.draft.get(key).to_string())
            .unwrap_or_default()
    }

    pub fn error(&self, key: &str) -> Option<&'static str> {
        self.session().and_then(|s| s.errors.get(key))
    }

    fn open(&mut self, target: SaveTarget<Id>, draft: FormDraft) {
        *self = Self::Editing(EditSession {
            target,
            draft,
            errors: FieldErrors::default(),
            saving: false,
            save_error: None,
        });
    }

    pub fn open_create<M: FormModel>(&mut self) {
        self.open(SaveTarget::Create, M::blank_draft());
    }

    pub fn open_edit<M>(&mut self, record: &M)
    where
        M: FormModel + Resource<Id = Id>,
    {
        self.open(SaveTarget::Update(record.id()), record.to_draft());
    }

    /// Edits are ignored while a save is in flight.
    pub fn set_field(&mut self, key: &'static str, value: impl Into<String>) {
        if let Some(session) = self.session_mut().filter(|s| !s.saving) {
            session.draft.set(key, value);
            session.errors.remove(key);
        }
    }

    pub fn attach_file<M: FormModel>(&mut self, name: impl Into<String>) {
        if let Some(session) = self.session_mut().filter(|s| !s.saving) {
            session.draft.attach_file(name);
            for field in M::fields().iter().filter(|f| f.kind == FieldKind::Image) {
                session.errors.remove(field.key);
            }
        }
    }

    pub fn clear_file(&mut self) {
        if let Some(session) = self.session_mut().filter(|s| !s.saving) {
            session.draft.clear_file();
        }
    }

    /// Validates the draft. On success the session enters `saving` and the
    /// request is returned; on failure the inline errors are set. Returns
    /// `None` while closed or already saving.
    pub fn begin_save<M: FormModel>(
        &mut self,
        policy: ImagePolicy,
    ) -> Option<SaveRequest<Id, M::Payload>> {
        let session = self.session_mut()?;
        if session.saving {
            return None;
        }
        match M::from_draft(&session.draft, policy) {
            Ok(payload) => {
                session.errors = FieldErrors::default();
                session.save_error = None;
                session.saving = true;
                Some(SaveRequest {
                    target: session.target,
                    payload,
                })
            }
            Err(errors) => {
                session.errors = errors;
                None
            }
        }
    }

    pub fn save_succeeded(&mut self) {
        *self = Self::Closed;
    }

    /// Stays open with the submitted values so the user can retry.
    pub fn save_failed(&mut self, message: impl Into<String>) {
        if let Some(session) = self.session_mut() {
            session.saving = false;
            session.save_error = Some(message.into());
        }
    }

    /// Returns `false` when a save is in flight and the modal stays open.
    pub fn close(&mut self) -> bool {
        if self.is_saving() {
            return false;
        }
        *self = Self::Closed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::form::KEY_TYPE;
    use contracts::domain::a001_category::{Category, CategoryId};
    use contracts::domain::a002_product::form::{KEY_IMAGE, KEY_NAME, KEY_PRICE};
    use contracts::domain::a002_product::{Product, ProductId};
    use contracts::domain::common::Status;

    fn category() -> Category {
        Category {
            id: CategoryId(9),
            product_type: "Postres".into(),
            description: "Dulces".into(),
            status: Status::Active,
            created_at: "2024-01-01T00:00:00.000Z".into(),
        }
    }

    #[test]
    fn test_invalid_save_keeps_modal_open() {
        let mut machine = ModalMachine::<CategoryId>::default();
        machine.open_create::<Category>();
        assert!(machine.begin_save::<Category>(ImagePolicy::Optional).is_none());
        assert!(machine.is_open());
        assert!(!machine.is_saving());
        assert!(machine.error(KEY_TYPE).is_some());

        machine.set_field(KEY_TYPE, "Bebidas");
        assert!(machine.error(KEY_TYPE).is_none());
    }

    #[test]
    fn test_duplicate_save_ignored() {
        let mut machine = ModalMachine::<CategoryId>::default();
        machine.open_edit(&category());
        let request = machine.begin_save::<Category>(ImagePolicy::Optional).unwrap();
        assert_eq!(request.target, SaveTarget::Update(CategoryId(9)));
        assert_eq!(request.payload.product_type, "Postres");
        assert!(machine.is_saving());

        assert!(machine.begin_save::<Category>(ImagePolicy::Optional).is_none());
        machine.set_field(KEY_TYPE, "ignorado");
        assert_eq!(machine.value(KEY_TYPE), "Postres");
        assert!(!machine.close());
    }

    #[test]
    fn test_failed_save_stays_open_with_values() {
        let mut machine = ModalMachine::<CategoryId>::default();
        machine.open_edit(&category());
        machine.begin_save::<Category>(ImagePolicy::Optional).unwrap();
        machine.save_failed("Error de red");

        let session = machine.session().unwrap();
        assert!(!session.saving);
        assert_eq!(session.save_error.as_deref(), Some("Error de red"));
        assert_eq!(machine.value(KEY_TYPE), "Postres");

        assert!(machine.begin_save::<Category>(ImagePolicy::Optional).is_some());
        machine.save_succeeded();
        assert!(!machine.is_open());
    }

    #[test]
    fn test_attaching_file_satisfies_required_image() {
        let mut machine = ModalMachine::<ProductId>::default();
        machine.open_create::<Product>();
        machine.set_field(KEY_NAME, "Latte");
        machine.set_field(KEY_PRICE, "4.25");
        machine.set_field("costo", "1");
        machine.set_field("id_categoria", "2");

        assert!(machine.begin_save::<Product>(ImagePolicy::Required).is_none());
        assert!(machine.error(KEY_IMAGE).is_some());

        machine.attach_file::<Product>("latte.png");
        assert!(machine.error(KEY_IMAGE).is_none());
        let request = machine.begin_save::<Product>(ImagePolicy::Required).unwrap();
        assert_eq!(request.target, SaveTarget::Create);
        assert_eq!(request.payload.image, None);
    }

    #[test]
    fn test_close_discards_draft() {
        let mut machine = ModalMachine::<CategoryId>::default();
        machine.open_create::<Category>();
        machine.set_field(KEY_TYPE, "Bebidas");
        assert!(machine.close());
        machine.open_create::<Category>();
        assert_eq!(machine.value(KEY_TYPE), "");
    }
}
