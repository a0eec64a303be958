//! The ordered table of field rules.
//!
//! [`FIELD_RULES`] fixes both which fields are inspected and the order in
//! which their messages appear in a [`Verdict`](super::Verdict). Fields that
//! are not listed here are never looked at.
//!
//! Rule functions receive the field name they are registered under so that
//! the shared shape rules (`must be a string`, `must be an object of strings`,
//! ...) can phrase their messages for whichever field they guard.

use super::CheckerSet;
use super::outcome::FieldOutcome;
use super::predicates::{
    is_absent, is_array_of_strings, is_object, is_object_of_strings, is_person, is_string,
    member,
};
use crate::manifest::FieldValue;

/// Signature shared by every rule in the table.
pub type RuleFn = fn(&'static str, FieldValue<'_>, &CheckerSet) -> FieldOutcome;

/// One entry of the registry: a manifest field and the rule guarding it.
#[derive(Clone, Copy)]
pub struct FieldRule {
    /// Manifest key this rule inspects
    pub field: &'static str,
    rule: RuleFn,
}

impl FieldRule {
    const fn new(field: &'static str, rule: RuleFn) -> Self {
        Self { field, rule }
    }

    /// Run the rule against a value looked up under [`FieldRule::field`].
    pub fn apply(&self, value: FieldValue<'_>, checkers: &CheckerSet) -> FieldOutcome {
        (self.rule)(self.field, value, checkers)
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule").field("field", &self.field).finish_non_exhaustive()
    }
}

/// Every inspected field, in reporting order.
pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule::new("name", validate_name),
    FieldRule::new("version", validate_version),
    FieldRule::new("license", validate_license),
    FieldRule::new("description", required_string),
    FieldRule::new("main", required_string),
    FieldRule::new("bin", validate_bin),
    FieldRule::new("keywords", recommended_array_of_strings),
    FieldRule::new("bugs", recommended_string),
    FieldRule::new("homepage", recommended_string),
    FieldRule::new("repository", validate_repository),
    FieldRule::new("files", recommended_array_of_strings),
    FieldRule::new("man", validate_man),
    FieldRule::new("directories", optional_object_of_strings),
    FieldRule::new("scripts", optional_object_of_strings),
    FieldRule::new("config", optional_object_of_strings),
    FieldRule::new("engines", optional_object_of_strings),
    FieldRule::new("publishConfig", optional_object),
    FieldRule::new("os", optional_array_of_strings),
    FieldRule::new("cpu", optional_array_of_strings),
    FieldRule::new("bundledDependencies", optional_array_of_strings),
    FieldRule::new("dependencies", optional_object_of_strings),
    FieldRule::new("devDependencies", optional_object_of_strings),
    FieldRule::new("peerDependencies", optional_object_of_strings),
    FieldRule::new("optionalDependencies", optional_object_of_strings),
    FieldRule::new("author", validate_author),
    FieldRule::new("contributors", validate_contributors),
];

fn missing(field: &str) -> FieldOutcome {
    FieldOutcome::warning(format!("missing {field}"))
}

fn must_be_string(field: &str) -> FieldOutcome {
    FieldOutcome::invalid(format!("{field} must be a string"))
}

fn string_value<'a>(value: FieldValue<'a>) -> Option<&'a str> {
    value.value().and_then(|v| v.as_str())
}

fn validate_name(
    field: &'static str,
    value: FieldValue<'_>,
    checkers: &CheckerSet,
) -> FieldOutcome {
    match string_value(value) {
        Some(name) => checkers.name.check_name(name).into(),
        None => must_be_string(field),
    }
}

fn validate_version(
    field: &'static str,
    value: FieldValue<'_>,
    checkers: &CheckerSet,
) -> FieldOutcome {
    match string_value(value) {
        Some(version) if checkers.version.is_valid_version(version) => FieldOutcome::Valid,
        Some(_) => FieldOutcome::invalid(format!("{field} must be a valid semver version")),
        None => must_be_string(field),
    }
}

fn validate_license(
    field: &'static str,
    value: FieldValue<'_>,
    checkers: &CheckerSet,
) -> FieldOutcome {
    match string_value(value) {
        Some(license) => checkers.license.check_license(license).into(),
        None => must_be_string(field),
    }
}

fn required_string(field: &'static str, value: FieldValue<'_>, _: &CheckerSet) -> FieldOutcome {
    if is_string(value) { FieldOutcome::Valid } else { must_be_string(field) }
}

fn recommended_string(field: &'static str, value: FieldValue<'_>, _: &CheckerSet) -> FieldOutcome {
    if is_absent(value) {
        missing(field)
    } else if is_string(value) {
        FieldOutcome::Valid
    } else {
        must_be_string(field)
    }
}

fn recommended_array_of_strings(
    field: &'static str,
    value: FieldValue<'_>,
    _: &CheckerSet,
) -> FieldOutcome {
    if is_absent(value) {
        missing(field)
    } else if is_array_of_strings(value) {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!("{field} must be an array of strings"))
    }
}

fn optional_array_of_strings(
    field: &'static str,
    value: FieldValue<'_>,
    _: &CheckerSet,
) -> FieldOutcome {
    if is_absent(value) || is_array_of_strings(value) {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!("{field} must be an array of strings"))
    }
}

fn optional_object_of_strings(
    field: &'static str,
    value: FieldValue<'_>,
    _: &CheckerSet,
) -> FieldOutcome {
    if is_absent(value) || is_object_of_strings(value) {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!("{field} must be an object of strings"))
    }
}

fn optional_object(field: &'static str, value: FieldValue<'_>, _: &CheckerSet) -> FieldOutcome {
    if is_absent(value) || is_object(value) {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!("{field} must be an object"))
    }
}

fn validate_bin(field: &'static str, value: FieldValue<'_>, _: &CheckerSet) -> FieldOutcome {
    if is_absent(value) || is_string(value) || is_object_of_strings(value) {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!("{field} must be a string or object of strings"))
    }
}

fn validate_repository(field: &'static str, value: FieldValue<'_>, _: &CheckerSet) -> FieldOutcome {
    if is_absent(value) {
        return missing(field);
    }
    let well_formed = is_string(value)
        || (is_object(value)
            && is_string(member(value, "type"))
            && is_string(member(value, "url")));
    if well_formed {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!("{field} must be string or object with a type and url"))
    }
}

fn validate_man(field: &'static str, value: FieldValue<'_>, _: &CheckerSet) -> FieldOutcome {
    if is_absent(value) || is_string(value) || is_array_of_strings(value) {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!("{field} must be a string or an array of strings"))
    }
}

fn validate_author(field: &'static str, value: FieldValue<'_>, _: &CheckerSet) -> FieldOutcome {
    if is_absent(value) {
        missing(field)
    } else if is_person(value) {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!(
            "{field} must be string or object with a name, email, and url"
        ))
    }
}

fn validate_contributors(
    field: &'static str,
    value: FieldValue<'_>,
    _: &CheckerSet,
) -> FieldOutcome {
    if is_absent(value) {
        return FieldOutcome::Valid;
    }
    let all_people = value
        .value()
        .and_then(|v| v.as_array())
        .is_some_and(|items| items.iter().all(|item| is_person(FieldValue::Present(item))));
    if all_people {
        FieldOutcome::Valid
    } else {
        FieldOutcome::invalid(format!(
            "{field} must be an array of strings or objects with a name, email, and url"
        ))
    }
}
