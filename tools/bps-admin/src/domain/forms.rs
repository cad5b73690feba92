//! Editable form state for the publication and auth screens.
//!
//! Forms only hold text. Turning it into a [`PublicationDraft`] or a
//! [`RegistrationForm`] is lossless, so a rejected submit leaves every
//! field as the operator typed it.

use std::path::PathBuf;

use bps_03_validation::{FormKind, RegistrationForm};
use shared_types::{CoverSource, Publication, PublicationDraft, PublicationId};

/// Single-line text buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Same length, every character replaced by `*`.
    pub fn masked(&self) -> String {
        "*".repeat(self.value.chars().count())
    }
}

// =============================================================================
// PUBLICATION FORM
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicationField {
    #[default]
    Title,
    ReleaseDate,
    Description,
    Cover,
}

impl PublicationField {
    pub const ALL: [PublicationField; 4] = [
        PublicationField::Title,
        PublicationField::ReleaseDate,
        PublicationField::Description,
        PublicationField::Cover,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PublicationField::Title => "Judul",
            PublicationField::ReleaseDate => "Tanggal Rilis (YYYY-MM-DD)",
            PublicationField::Description => "Deskripsi",
            PublicationField::Cover => "File Sampul",
        }
    }

    fn offset(self, by: isize) -> PublicationField {
        let len = Self::ALL.len() as isize;
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ALL[(idx + by).rem_euclid(len) as usize]
    }
}

/// Add or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationForm {
    pub kind: FormKind,
    /// Publication being edited
    pub target: Option<PublicationId>,
    pub title: TextInput,
    pub release_date: TextInput,
    pub description: TextInput,
    /// Path of a local cover file; empty keeps the current cover
    pub cover_path: TextInput,
    /// Stored cover URL (edit only)
    pub existing_cover: Option<String>,
    pub focus: PublicationField,
    pub errors: Vec<String>,
    pub submitting: bool,
    /// Edit was opened for an id that is not in the list
    pub not_found: bool,
}

impl PublicationForm {
    pub fn for_add() -> Self {
        Self {
            kind: FormKind::Add,
            target: None,
            title: TextInput::default(),
            release_date: TextInput::default(),
            description: TextInput::default(),
            cover_path: TextInput::default(),
            existing_cover: None,
            focus: PublicationField::Title,
            errors: Vec::new(),
            submitting: false,
            not_found: false,
        }
    }

    pub fn for_edit(publication: &Publication) -> Self {
        let draft = PublicationDraft::from_publication(publication);
        let existing_cover = match draft.cover {
            CoverSource::Existing(url) => Some(url),
            _ => None,
        };
        Self {
            kind: FormKind::Edit,
            target: Some(publication.id),
            title: TextInput::new(draft.title),
            release_date: TextInput::new(draft.release_date),
            description: TextInput::new(draft.description),
            existing_cover,
            ..Self::for_add()
        }
    }

    /// Edit form for an id that could not be found.
    pub fn missing(id: PublicationId) -> Self {
        Self {
            kind: FormKind::Edit,
            target: Some(id),
            not_found: true,
            ..Self::for_add()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.offset(1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.offset(-1);
    }

    pub fn field(&self, field: PublicationField) -> &TextInput {
        match field {
            PublicationField::Title => &self.title,
            PublicationField::ReleaseDate => &self.release_date,
            PublicationField::Description => &self.description,
            PublicationField::Cover => &self.cover_path,
        }
    }

    fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            PublicationField::Title => &mut self.title,
            PublicationField::ReleaseDate => &mut self.release_date,
            PublicationField::Description => &mut self.description,
            PublicationField::Cover => &mut self.cover_path,
        }
    }

    pub fn input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().backspace();
    }

    /// Snapshot of the fields for the submit flow.
    pub fn to_draft(&self) -> PublicationDraft {
        let path = self.cover_path.as_str().trim();
        let cover = if !path.is_empty() {
            CoverSource::LocalFile(PathBuf::from(path))
        } else if let Some(url) = &self.existing_cover {
            CoverSource::Existing(url.clone())
        } else {
            CoverSource::None
        };

        PublicationDraft {
            title: self.title.as_str().to_string(),
            release_date: self.release_date.as_str().to_string(),
            description: self.description.as_str().to_string(),
            cover,
        }
    }
}

impl Default for PublicationForm {
    fn default() -> Self {
        Self::for_add()
    }
}

// =============================================================================
// AUTH FORM
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Name => "Nama",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Konfirmasi Password",
            AuthField::Terms => "Setuju syarat dan ketentuan",
        }
    }
}

/// Login and register share one screen; `mode` picks the visible fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm_password: TextInput,
    pub terms_accepted: bool,
    pub focus: AuthField,
    pub errors: Vec<String>,
    pub success: Option<String>,
    pub busy: bool,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            name: TextInput::default(),
            email: TextInput::default(),
            password: TextInput::default(),
            confirm_password: TextInput::default(),
            terms_accepted: false,
            focus: AuthField::Email,
            errors: Vec::new(),
            success: None,
            busy: false,
        }
    }
}

impl AuthForm {
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
                AuthField::Terms,
            ],
        }
    }

    /// Flip between login and register, keeping typed values.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.errors.clear();
        self.success = None;
        self.focus = self.fields()[0];
    }

    fn move_focus(&mut self, by: isize) {
        let fields = self.fields();
        let len = fields.len() as isize;
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        self.focus = fields[(idx + by).rem_euclid(len) as usize];
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn focused_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            AuthField::Name => Some(&mut self.name),
            AuthField::Email => Some(&mut self.email),
            AuthField::Password => Some(&mut self.password),
            AuthField::ConfirmPassword => Some(&mut self.confirm_password),
            AuthField::Terms => None,
        }
    }

    /// Type into the focused field. On the terms checkbox a space toggles it.
    pub fn input(&mut self, c: char) {
        match self.focused_mut() {
            Some(field) => field.push(c),
            None if c == ' ' => self.terms_accepted = !self.terms_accepted,
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.backspace();
        }
    }

    pub fn credentials(&self) -> (String, String) {
        (
            self.email.as_str().to_string(),
            self.password.as_str().to_string(),
        )
    }

    pub fn registration(&self) -> RegistrationForm {
        RegistrationForm {
            name: self.name.as_str().to_string(),
            email: self.email.as_str().to_string(),
            password: self.password.as_str().to_string(),
            confirm_password: self.confirm_password.as_str().to_string(),
            terms_accepted: self.terms_accepted,
        }
    }
}
