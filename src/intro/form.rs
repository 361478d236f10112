use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown form field: {0}")]
pub struct UnknownFieldError(pub Box<str>);

/// The free-text inputs of the form, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Field,
    Major,
    Certificate,
    Strength,
    Experience,
    Contribution,
    Extra,
}

impl ScalarField {
    pub const ALL: [ScalarField; 7] = [
        Self::Field,
        Self::Major,
        Self::Certificate,
        Self::Strength,
        Self::Experience,
        Self::Contribution,
        Self::Extra,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Major => "major",
            Self::Certificate => "certificate",
            Self::Strength => "strength",
            Self::Experience => "experience",
            Self::Contribution => "contribution",
            Self::Extra => "extra",
        }
    }
}

impl FromStr for ScalarField {
    type Err = UnknownFieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| UnknownFieldError(name.into()))
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    Logical,
    Emotional,
    Creative,
}

impl StyleFlag {
    /// Declaration order, which is also the order flags are listed in the prompt.
    pub const ALL: [StyleFlag; 3] = [Self::Logical, Self::Emotional, Self::Creative];

    pub fn name(self) -> &'static str {
        match self {
            Self::Logical => "logical",
            Self::Emotional => "emotional",
            Self::Creative => "creative",
        }
    }
}

impl FromStr for StyleFlag {
    type Err = UnknownFieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.name() == name)
            .ok_or_else(|| UnknownFieldError(name.into()))
    }
}

impl fmt::Display for StyleFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleFlags {
    pub logical: bool,
    pub emotional: bool,
    pub creative: bool,
}

impl StyleFlags {
    pub fn get(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Logical => self.logical,
            StyleFlag::Emotional => self.emotional,
            StyleFlag::Creative => self.creative,
        }
    }

    pub fn set(&mut self, flag: StyleFlag, checked: bool) {
        let slot = match flag {
            StyleFlag::Logical => &mut self.logical,
            StyleFlag::Emotional => &mut self.emotional,
            StyleFlag::Creative => &mut self.creative,
        };
        *slot = checked;
    }

    pub fn enabled(&self) -> impl Iterator<Item = StyleFlag> + '_ {
        StyleFlag::ALL.into_iter().filter(|flag| self.get(*flag))
    }
}

/// Everything the user typed into the form. Lives for one session only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub field: String,
    pub major: String,
    pub certificate: String,
    pub strength: String,
    pub experience: String,
    pub contribution: String,
    pub style: StyleFlags,
    pub extra: String,
}

impl FormState {
    pub fn get(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Field => &self.field,
            ScalarField::Major => &self.major,
            ScalarField::Certificate => &self.certificate,
            ScalarField::Strength => &self.strength,
            ScalarField::Experience => &self.experience,
            ScalarField::Contribution => &self.contribution,
            ScalarField::Extra => &self.extra,
        }
    }

    pub fn update_field(&mut self, field: ScalarField, value: impl Into<String>) {
        let slot = match field {
            ScalarField::Field => &mut self.field,
            ScalarField::Major => &mut self.major,
            ScalarField::Certificate => &mut self.certificate,
            ScalarField::Strength => &mut self.strength,
            ScalarField::Experience => &mut self.experience,
            ScalarField::Contribution => &mut self.contribution,
            ScalarField::Extra => &mut self.extra,
        };
        *slot = value.into();
    }

    pub fn update_style_flag(&mut self, flag: StyleFlag, checked: bool) {
        self.style.set(flag, checked);
    }
}
