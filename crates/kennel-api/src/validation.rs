//! Input validation for Kennel API request bodies
//!
//! Each field has a validator returning either the coerced value or the list of
//! every message that applies to it. `validate_breed` and `validate_dog` combine
//! them into a mapping of field name to messages.

use std::borrow::Cow;
use std::fmt::Display;
use std::num::IntErrorKind;

use kennel_common::{BreedSize, FieldErrors, NON_FIELD_ERRORS};
use kennel_persistence::{BreedData, DogData};
use serde_json::{Map, Value};
use validator::ValidationError;

/// Maximum length for breed name
pub const MAX_BREED_NAME_LENGTH: usize = 100;

/// Maximum length for dog name
pub const MAX_DOG_NAME_LENGTH: usize = 100;

/// Maximum length for dog gender
pub const MAX_GENDER_LENGTH: usize = 10;

/// Maximum length for dog color
pub const MAX_COLOR_LENGTH: usize = 50;

/// Maximum length for favorite_food field
pub const MAX_FAVORITE_FOOD_LENGTH: usize = 100;

/// Maximum length for favorite_toy field
pub const MAX_FAVORITE_TOY_LENGTH: usize = 100;

/// Lowest accepted breed rating
pub const RATING_MIN: i128 = 1;

/// Highest accepted breed rating
pub const RATING_MAX: i128 = 5;

pub const AGE_MIN: i128 = 0;
pub const AGE_MAX: i128 = i32::MAX as i128;

/// Longest string accepted by an integer field
pub const MAX_STRING_LENGTH: usize = 1000;

/// Per-field validation outcome
pub type FieldResult<T> = Result<T, Vec<ValidationError>>;

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

pub fn required() -> ValidationError {
    error("required", "This field is required.")
}

pub fn null() -> ValidationError {
    error("null", "This field may not be null.")
}

pub fn blank() -> ValidationError {
    error("blank", "This field may not be blank.")
}

pub fn null_characters() -> ValidationError {
    error("null_characters_not_allowed", "Null characters are not allowed.")
}

pub fn invalid_string() -> ValidationError {
    error("invalid", "Not a valid string.")
}

pub fn invalid_integer() -> ValidationError {
    error("invalid", "A valid integer is required.")
}

pub fn max_string_length() -> ValidationError {
    error("max_string_length", "String value too large.")
}

pub fn min_value(limit: impl Display) -> ValidationError {
    error(
        "min_value",
        format!("Ensure this value is greater than or equal to {}.", limit),
    )
}

pub fn max_value(limit: impl Display) -> ValidationError {
    error(
        "max_value",
        format!("Ensure this value is less than or equal to {}.", limit),
    )
}

pub fn max_length(limit: usize) -> ValidationError {
    error(
        "max_length",
        format!("Ensure this field has no more than {} characters.", limit),
    )
}

pub fn invalid_choice(input: &str) -> ValidationError {
    error("invalid_choice", format!("\"{}\" is not a valid choice.", input))
}

pub fn incorrect_type(type_name: &str) -> ValidationError {
    error(
        "incorrect_type",
        format!("Incorrect type. Expected pk value, received {}.", type_name),
    )
}

pub fn does_not_exist(pk: impl Display) -> ValidationError {
    error(
        "does_not_exist",
        format!("Invalid pk \"{}\" - object does not exist.", pk),
    )
}

/// Text shown to callers for a validation error
pub fn error_message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Type name of a JSON value as reported in validation messages
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Render a scalar the way it appears inside a message
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

fn present(value: Option<&Value>) -> FieldResult<&Value> {
    match value {
        None => Err(vec![required()]),
        Some(Value::Null) => Err(vec![null()]),
        Some(v) => Ok(v),
    }
}

/// Validate a required text field.
///
/// Numbers are accepted and kept as their text form. Surrounding whitespace is trimmed.
pub fn validate_char_field(value: Option<&Value>, max: usize) -> FieldResult<String> {
    let text = match present(value)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Err(vec![invalid_string()]),
    };

    if text.is_empty() {
        return Err(vec![blank()]);
    }

    let mut errors = Vec::new();
    if text.chars().count() > max {
        errors.push(max_length(max));
    }
    if text.contains('\0') {
        errors.push(null_characters());
    }

    if errors.is_empty() {
        Ok(text)
    } else {
        Err(errors)
    }
}

/// Parse integer text: surrounding whitespace, a sign and a trailing `.0…` are allowed
fn parse_integer_text(text: &str) -> Option<i128> {
    let text = text.trim_end();
    let text = match text.rfind('.') {
        Some(pos) if text[pos + 1..].chars().all(|c| c == '0') => &text[..pos],
        _ => text,
    };
    parse_saturating(text.trim())
}

/// Parse a signed digit string, clamping values beyond `i128` to its bounds
fn parse_saturating(text: &str) -> Option<i128> {
    match text.parse::<i128>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i128::MAX),
            IntErrorKind::NegOverflow => Some(i128::MIN),
            _ => None,
        },
    }
}

/// Coerce a JSON value to an integer without range checks
pub fn coerce_integer(value: &Value) -> FieldResult<i128> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i128::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(i128::from(u))
            } else {
                // Integers beyond u64 arrive as floats; `as` saturates at the i128 bounds.
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 => Ok(f as i128),
                    _ => Err(vec![invalid_integer()]),
                }
            }
        }
        Value::String(s) => {
            if s.chars().count() > MAX_STRING_LENGTH {
                return Err(vec![max_string_length()]);
            }
            parse_integer_text(s).ok_or_else(|| vec![invalid_integer()])
        }
        _ => Err(vec![invalid_integer()]),
    }
}

/// Validate a required integer field within `[min, max]`.
///
/// Every violated bound contributes a message.
pub fn validate_integer_field(value: Option<&Value>, min: i128, max: i128) -> FieldResult<i32> {
    let number = coerce_integer(present(value)?)?;

    let mut errors = Vec::new();
    if number > max {
        errors.push(max_value(max));
    }
    if number < min {
        errors.push(min_value(min));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    i32::try_from(number).map_err(|_| vec![invalid_integer()])
}

/// Validate a breed rating in `[1, 5]`
pub fn validate_rating(value: Option<&Value>) -> FieldResult<i32> {
    validate_integer_field(value, RATING_MIN, RATING_MAX)
}

/// Validate a dog age, non-negative and within a 32-bit integer
pub fn validate_age(value: Option<&Value>) -> FieldResult<i32> {
    validate_integer_field(value, AGE_MIN, AGE_MAX)
}

/// Validate a breed size code, exactly one of `T`, `S`, `M`, `L`
pub fn validate_size(value: Option<&Value>) -> FieldResult<BreedSize> {
    let text = display_value(present(value)?);
    text.parse::<BreedSize>()
        .map_err(|_| vec![invalid_choice(&text)])
}

/// Validate the shape of a primary key reference.
///
/// Existence is checked by the caller; an empty string counts as null.
pub fn validate_pk(value: Option<&Value>) -> FieldResult<i128> {
    if matches!(value, Some(Value::String(s)) if s.is_empty()) {
        return Err(vec![null()]);
    }

    let value = present(value)?;
    let pk = match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .map(|f| f as i128)
            }),
        Value::String(s) => parse_saturating(s.trim()),
        _ => None,
    };

    pk.ok_or_else(|| vec![incorrect_type(json_type_name(value))])
}

fn collect<T>(errors: &mut FieldErrors, field: &str, result: FieldResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(field_errors) => {
            errors.extend_field(field, field_errors.iter().map(error_message));
            None
        }
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, FieldErrors> {
    match body {
        Value::Object(fields) => Ok(fields),
        Value::Null => Err(FieldErrors::single(NON_FIELD_ERRORS, "No data provided")),
        other => Err(FieldErrors::single(
            NON_FIELD_ERRORS,
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type_name(other)
            ),
        )),
    }
}

/// Validate a breed create/update body
pub fn validate_breed(body: &Value) -> Result<BreedData, FieldErrors> {
    let fields = as_object(body)?;
    let mut errors = FieldErrors::new();

    let name = collect(
        &mut errors,
        "name",
        validate_char_field(fields.get("name"), MAX_BREED_NAME_LENGTH),
    );
    let size = collect(&mut errors, "size", validate_size(fields.get("size")));
    let friendliness = collect(
        &mut errors,
        "friendliness",
        validate_rating(fields.get("friendliness")),
    );
    let trainability = collect(
        &mut errors,
        "trainability",
        validate_rating(fields.get("trainability")),
    );
    let shedding_amount = collect(
        &mut errors,
        "shedding_amount",
        validate_rating(fields.get("shedding_amount")),
    );
    let exercise_needs = collect(
        &mut errors,
        "exercise_needs",
        validate_rating(fields.get("exercise_needs")),
    );

    match (
        name,
        size,
        friendliness,
        trainability,
        shedding_amount,
        exercise_needs,
    ) {
        (
            Some(name),
            Some(size),
            Some(friendliness),
            Some(trainability),
            Some(shedding_amount),
            Some(exercise_needs),
        ) => Ok(BreedData {
            name,
            size,
            friendliness,
            trainability,
            shedding_amount,
            exercise_needs,
        }),
        _ => Err(errors),
    }
}

/// The breed a dog body points at, if `breed_id` is a well-formed pk
pub fn requested_breed_id(body: &Value) -> Option<i32> {
    let pk = validate_pk(body.as_object()?.get("breed_id")).ok()?;
    i32::try_from(pk).ok()
}

/// Validate a dog create/update body.
///
/// `breed_exists` tells whether the breed named by `requested_breed_id` is stored.
/// `id` and `breed` keys are ignored.
pub fn validate_dog(body: &Value, breed_exists: bool) -> Result<DogData, FieldErrors> {
    let fields = as_object(body)?;
    let mut errors = FieldErrors::new();

    let name = collect(
        &mut errors,
        "name",
        validate_char_field(fields.get("name"), MAX_DOG_NAME_LENGTH),
    );
    let age = collect(&mut errors, "age", validate_age(fields.get("age")));
    let gender = collect(
        &mut errors,
        "gender",
        validate_char_field(fields.get("gender"), MAX_GENDER_LENGTH),
    );
    let color = collect(
        &mut errors,
        "color",
        validate_char_field(fields.get("color"), MAX_COLOR_LENGTH),
    );
    let favorite_food = collect(
        &mut errors,
        "favorite_food",
        validate_char_field(fields.get("favorite_food"), MAX_FAVORITE_FOOD_LENGTH),
    );
    let favorite_toy = collect(
        &mut errors,
        "favorite_toy",
        validate_char_field(fields.get("favorite_toy"), MAX_FAVORITE_TOY_LENGTH),
    );
    let breed_id = collect(
        &mut errors,
        "breed_id",
        validate_pk(fields.get("breed_id")).and_then(|pk| match i32::try_from(pk) {
            Ok(id) if breed_exists => Ok(id),
            _ => Err(vec![does_not_exist(pk)]),
        }),
    );

    match (name, age, gender, color, favorite_food, favorite_toy, breed_id) {
        (
            Some(name),
            Some(age),
            Some(gender),
            Some(color),
            Some(favorite_food),
            Some(favorite_toy),
            Some(breed_id),
        ) => Ok(DogData {
            name,
            age,
            gender,
            color,
            favorite_food,
            favorite_toy,
            breed_id,
        }),
        _ => Err(errors),
    }
}
