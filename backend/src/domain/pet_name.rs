//! Pet name data model.
//!
//! A [`PetNameRecord`] is one stored (or synthesised) pet name together with
//! its [`PetType`]. Records are immutable once created; the only way to make
//! one durable is [`NewPetName`] passed through the ingestion service.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Closed set of pet types a record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetType {
    /// Dogs.
    Dog,
    /// Cats.
    Cat,
    /// Birds.
    Bird,
    /// Fish.
    Fish,
    /// Rabbits.
    Rabbit,
    /// Hamsters.
    Hamster,
    /// Anything else; also the type given to fallback names when no filter
    /// was requested.
    Other,
}

impl PetType {
    /// Every pet type, in presentation order.
    pub const ALL: [Self; 7] = [
        Self::Dog,
        Self::Cat,
        Self::Bird,
        Self::Fish,
        Self::Rabbit,
        Self::Hamster,
        Self::Other,
    ];

    /// Returns the wire and database string representation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pet_names_backend::domain::PetType;
    /// assert_eq!(PetType::Hamster.as_str(), "hamster");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
            Self::Fish => "fish",
            Self::Rabbit => "rabbit",
            Self::Hamster => "hamster",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown pet type string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pet type: {input}")]
pub struct ParsePetTypeError {
    /// The unrecognised input value.
    pub input: String,
}

impl FromStr for PetType {
    type Err = ParsePetTypeError;

    /// Parses the exact lowercase spelling; no case folding or trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == s)
            .ok_or_else(|| ParsePetTypeError {
                input: s.to_owned(),
            })
    }
}

/// Validation errors for user-supplied pet names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PetNameValidationError {
    /// The name was empty.
    #[error("pet name must not be empty")]
    Empty,
    /// The name exceeded [`PET_NAME_MAX`] characters.
    #[error("pet name must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

/// Maximum length of a submitted pet name, counted in characters.
pub const PET_NAME_MAX: usize = 50;

/// A validated, user-submitted pet name.
///
/// The content is kept verbatim: punctuation, apostrophes and inner or
/// surrounding whitespace survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetNameText(String);

impl PetNameText {
    /// Validate and construct a [`PetNameText`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use pet_names_backend::domain::PetNameText;
    /// let name = PetNameText::new("Mr. Whiskers O'Malley").expect("valid name");
    /// assert_eq!(name.as_ref(), "Mr. Whiskers O'Malley");
    /// assert!(PetNameText::new("").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, PetNameValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PetNameValidationError::Empty);
        }
        if name.chars().count() > PET_NAME_MAX {
            return Err(PetNameValidationError::TooLong { max: PET_NAME_MAX });
        }
        Ok(Self(name))
    }

    /// Consume the wrapper and return the raw string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PetNameText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Error returned when a generation count falls outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("count must be between {min} and {max}, got {value}", min = GenerationCount::MIN, max = GenerationCount::MAX)]
pub struct GenerationCountError {
    /// The rejected value.
    pub value: i64,
}

/// Number of names requested from the selection service, always in
/// `[GenerationCount::MIN, GenerationCount::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationCount(u8);

impl GenerationCount {
    /// Smallest accepted count.
    pub const MIN: u8 = 1;
    /// Largest accepted count.
    pub const MAX: u8 = 10;

    /// Validate a requested count. Out-of-range values are rejected, never
    /// clamped.
    pub fn new(value: i64) -> Result<Self, GenerationCountError> {
        u8::try_from(value)
            .ok()
            .filter(|count| (Self::MIN..=Self::MAX).contains(count))
            .map(Self)
            .ok_or(GenerationCountError { value })
    }

    /// The count as a `usize` for iteration.
    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for GenerationCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// Identifier of a pet name record.
///
/// Stored records receive theirs from the store; fallback records carry a
/// locally drawn placeholder that is neither persisted nor unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PetNameId(i32);

impl PetNameId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PetNameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pet name as returned by the store or synthesised by the fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetNameRecord {
    pub id: PetNameId,
    pub name: String,
    pub pet_type: PetType,
    pub created_at: DateTime<Utc>,
}

/// Input for a single durable insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPetName {
    pub name: PetNameText,
    pub pet_type: PetType,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for pet name value objects.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pet_type_round_trips_through_strings() {
        for pet_type in PetType::ALL {
            let parsed: PetType = pet_type.as_str().parse().expect("known pet type");
            assert_eq!(parsed, pet_type);
        }
    }

    #[rstest]
    #[case("lizard")]
    #[case("Dog")]
    #[case(" cat")]
    #[case("")]
    fn pet_type_rejects_unknown_spellings(#[case] input: &str) {
        let err = input.parse::<PetType>().expect_err("unknown pet type");
        assert_eq!(err.input, input);
    }

    #[rstest]
    #[case("Fluffy")]
    #[case("Mr. Whiskers O'Malley")]
    #[case("  Padded  ")]
    #[case("   ")]
    fn pet_name_text_preserves_content(#[case] input: &str) {
        let name = PetNameText::new(input).expect("valid name");
        assert_eq!(name.as_ref(), input);
    }

    #[rstest]
    fn pet_name_text_rejects_empty() {
        assert_eq!(PetNameText::new(""), Err(PetNameValidationError::Empty));
    }

    #[rstest]
    fn pet_name_text_length_is_counted_in_characters() {
        let at_limit = "é".repeat(PET_NAME_MAX);
        assert!(PetNameText::new(at_limit).is_ok());

        let over_limit = "a".repeat(PET_NAME_MAX + 1);
        assert_eq!(
            PetNameText::new(over_limit),
            Err(PetNameValidationError::TooLong { max: PET_NAME_MAX })
        );
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(10)]
    fn generation_count_accepts_bounds(#[case] value: i64) {
        let count = GenerationCount::new(value).expect("in range");
        assert_eq!(count.get() as i64, value);
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(-1)]
    #[case(i64::MAX)]
    fn generation_count_rejects_out_of_range(#[case] value: i64) {
        assert_eq!(
            GenerationCount::new(value),
            Err(GenerationCountError { value })
        );
    }

    #[rstest]
    fn generation_count_defaults_to_one() {
        assert_eq!(GenerationCount::default().get(), 1);
    }
}
