use super::counter::clamp_message;
use super::submission::FormData;
use super::validation::{validate_field, FieldError, FieldKind, FieldSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn spec(self) -> FieldSpec {
        match self {
            ContactField::Name => FieldSpec { name: "name", kind: FieldKind::Text, required: true },
            ContactField::Email => FieldSpec { name: "email", kind: FieldKind::Email, required: true },
            ContactField::Phone => FieldSpec { name: "phone", kind: FieldKind::Tel, required: false },
            ContactField::Subject => FieldSpec { name: "subject", kind: FieldKind::Select, required: true },
            ContactField::Message => FieldSpec { name: "message", kind: FieldKind::TextArea, required: true },
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "الاسم الكامل",
            ContactField::Email => "البريد الإلكتروني",
            ContactField::Phone => "رقم الجوال",
            ContactField::Subject => "الموضوع",
            ContactField::Message => "الرسالة",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
    /// Transient success border, cleared by a timer.
    pub highlighted: bool,
}

impl FieldState {
    pub fn class(&self) -> Option<&'static str> {
        if self.error.is_some() {
            Some("field-invalid")
        } else if self.highlighted {
            Some("field-valid")
        } else {
            None
        }
    }
}

/// Values and validation flags of the contact form, one slot per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    fields: [FieldState; 5],
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn value(&self, field: ContactField) -> &str {
        &self.field(field).value
    }

    /// Stores a new value typed by the user. Any error or highlight on the
    /// field is dropped until it is validated again.
    pub fn set_value(&mut self, field: ContactField, value: &str) {
        let slot = &mut self.fields[field.index()];
        slot.value = if field == ContactField::Message {
            clamp_message(value)
        } else {
            value.to_string()
        };
        slot.error = None;
        slot.highlighted = false;
    }

    /// Validates one field and records the outcome on it. A valid field gets
    /// the success highlight; the caller schedules [`Self::clear_highlight`].
    pub fn validate_field(&mut self, field: ContactField) -> bool {
        let slot = &mut self.fields[field.index()];
        match validate_field(&field.spec(), &slot.value) {
            Ok(()) => {
                slot.error = None;
                slot.highlighted = true;
                true
            }
            Err(err) => {
                slot.error = Some(err);
                slot.highlighted = false;
                false
            }
        }
    }

    pub fn clear_highlight(&mut self, field: ContactField) {
        self.fields[field.index()].highlighted = false;
    }

    /// Validates every required field. All of them are checked so every
    /// error shows at once.
    pub fn validate_contact_form(&mut self) -> bool {
        ContactField::ALL
            .iter()
            .filter(|field| field.spec().required)
            .fold(true, |valid, field| self.validate_field(*field) && valid)
    }

    /// First required field carrying an error. Optional fields are left out
    /// since submit does not validate them.
    pub fn first_invalid(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.spec().required)
            .find(|field| self.field(*field).error.is_some())
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|f| f.error.is_some()).count()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn form_data(&self) -> FormData {
        ContactField::ALL
            .iter()
            .map(|field| (field.name().to_string(), self.value(*field).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.set_value(ContactField::Name, "سارة العتيبي");
        state.set_value(ContactField::Email, "sara@uni.edu.sa");
        state.set_value(ContactField::Subject, "registration");
        state.set_value(ContactField::Message, "أود الاستفسار عن مواعيد التدريب");
        state
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut state = ContactFormState::new();
        assert!(!state.validate_contact_form());
        assert_eq!(state.error_count(), 4);
        assert_eq!(state.field(ContactField::Phone).error, None);
        assert_eq!(state.first_invalid(), Some(ContactField::Name));
    }

    #[test]
    fn each_empty_required_field_gets_exactly_one_error() {
        for field in ContactField::ALL.into_iter().filter(|f| f.spec().required) {
            let mut state = ContactFormState::new();
            assert!(!state.validate_field(field));
            assert_eq!(state.error_count(), 1);
            assert_eq!(state.field(field).error, Some(FieldError::Required));
        }
    }

    #[test]
    fn filled_form_is_valid_and_highlighted() {
        let mut state = filled();
        assert!(state.validate_contact_form());
        assert_eq!(state.error_count(), 0);
        assert!(state.field(ContactField::Email).highlighted);
        assert_eq!(state.field(ContactField::Email).class(), Some("field-valid"));
    }

    #[test]
    fn later_fields_are_checked_after_an_early_failure() {
        let mut state = filled();
        state.set_value(ContactField::Name, "");
        state.set_value(ContactField::Message, "قصيرة");
        assert!(!state.validate_contact_form());
        assert_eq!(state.field(ContactField::Name).error, Some(FieldError::Required));
        assert_eq!(
            state.field(ContactField::Message).error,
            Some(FieldError::MessageTooShort { min: 10 })
        );
    }

    #[test]
    fn first_invalid_ignores_optional_fields() {
        let mut state = filled();
        state.set_value(ContactField::Phone, "12");
        state.validate_field(ContactField::Phone);
        assert_eq!(state.first_invalid(), None);

        state.set_value(ContactField::Message, "");
        state.validate_contact_form();
        assert_eq!(state.first_invalid(), Some(ContactField::Message));
    }

    #[test]
    fn typing_clears_error() {
        let mut state = ContactFormState::new();
        state.validate_field(ContactField::Email);
        assert_eq!(state.field(ContactField::Email).class(), Some("field-invalid"));
        state.set_value(ContactField::Email, "s");
        assert_eq!(state.field(ContactField::Email).error, None);
        assert_eq!(state.field(ContactField::Email).class(), None);
    }

    #[test]
    fn highlight_clears_on_request() {
        let mut state = filled();
        state.validate_field(ContactField::Name);
        state.clear_highlight(ContactField::Name);
        assert!(!state.field(ContactField::Name).highlighted);
    }

    #[test]
    fn message_is_capped() {
        let mut state = ContactFormState::new();
        state.set_value(ContactField::Message, &"a".repeat(1005));
        assert_eq!(state.value(ContactField::Message).chars().count(), 1000);
    }

    #[test]
    fn other_fields_are_not_capped() {
        let mut state = ContactFormState::new();
        state.set_value(ContactField::Name, &"a".repeat(1005));
        assert_eq!(state.value(ContactField::Name).len(), 1005);
    }

    #[test]
    fn form_data_maps_names_to_values() {
        let data = filled().form_data();
        assert_eq!(data.len(), 5);
        assert_eq!(data["email"], "sara@uni.edu.sa");
        assert_eq!(data["phone"], "");
    }

    #[test]
    fn reset_empties_everything() {
        let mut state = filled();
        state.validate_contact_form();
        state.reset();
        assert_eq!(state, ContactFormState::new());
    }
}
