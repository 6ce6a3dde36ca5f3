//! Attribute extraction and name normalization.
//!
//! Markup attributes arrive with kebab-case or snake_case names; programs
//! expect camelCase property keys. `extract` reads an element's static
//! attribute list once, at connect time, normalizing each name and copying
//! each value unchanged. Attribute mutation after connection is never
//! observed.

use crate::host::HostElement;
use std::collections::HashMap;

/// Normalized attribute mapping, built fresh on every connect.
pub type PropMap = HashMap<String, String>;

/// Normalize an attribute name to camelCase.
///
/// The whole name is lower-cased, runs of hyphens and underscores collapse
/// into a single separator, anything that is neither alphanumeric nor a
/// separator is stripped, and the character following each separator is
/// upper-cased.
///
/// # Example
///
/// ```
/// use portico::props::camelize;
///
/// assert_eq!(camelize("data-x"), "dataX");
/// assert_eq!(camelize("my_attr-two"), "myAttrTwo");
/// assert_eq!(camelize("LABEL"), "label");
/// ```
pub fn camelize(name: &str) -> String {
    let lowered = name.to_lowercase();

    // Collapse every run of hyphens/underscores into a single space.
    let mut spaced = String::with_capacity(lowered.len());
    let mut previous_was_separator = false;
    for ch in lowered.chars() {
        if ch == '-' || ch == '_' {
            if !previous_was_separator {
                spaced.push(' ');
            }
            previous_was_separator = true;
        } else {
            spaced.push(ch);
            previous_was_separator = false;
        }
    }

    // Drop anything that is neither alphanumeric nor a space, then upper-case
    // the character following each space and remove the spaces themselves.
    let mut camelized = String::with_capacity(spaced.len());
    let mut upper_next = false;
    for ch in spaced.chars() {
        if !ch.is_alphanumeric() && ch != ' ' {
            continue;
        }
        if ch == ' ' {
            upper_next = true;
            continue;
        }
        if upper_next {
            camelized.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            camelized.push(ch);
        }
    }
    camelized
}

/// Read an element's static attribute list into a [`PropMap`].
///
/// Values are copied as strings with no type coercion. An element with no
/// attributes yields an empty map, which downstream merging keeps distinct
/// from an explicit empty flags object.
pub fn extract<E: HostElement>(element: &E) -> PropMap {
    let mut props = PropMap::new();
    for (name, value) in element.attributes() {
        props.insert(camelize(&name), value);
    }
    props
}
