//! Identifier sanitization for SPDX output.
//!
//! SPDX identifiers (SPDXRef-..., LicenseRef-...) only allow letters,
//! digits, `.` and `-`. Component and license names coming back from the
//! hub server routinely contain spaces, punctuation and other characters
//! that would produce an invalid document, so every value that ends up in
//! an identifier position passes through [`clean_for_spdx`] first.

/// Sanitize a string for use inside an SPDX identifier.
///
/// Removes `; : ! * ( ) / ,`, spaces and dots, then substitutes the two
/// characters that carry meaning: `@` becomes `-at-` (so
/// `log4j@2.14` stays readable) and `_` becomes `uu` (underscore is not
/// a legal identifier character).
///
/// # Arguments
/// * `input` - Raw name or version text from the hub server
///
/// # Returns
/// A string containing only identifier-safe characters
pub fn clean_for_spdx(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            ';' | ':' | '!' | '*' | '(' | ')' | '/' | ',' | ' ' | '.' => {}
            '@' => out.push_str("-at-"),
            '_' => out.push_str("uu"),
            _ => out.push(c),
        }
    }
    out
}

/// Remove single and double quotes from a string.
///
/// Used on purl segments and relationship endpoints where quoted values
/// from the server would otherwise leak into the document.
pub fn strip_quotes(input: &str) -> String {
    input.chars().filter(|c| *c != '"' && *c != '\'').collect()
}

/// Reduce a component description to characters that are safe in every
/// output format.
///
/// Keeps ASCII letters and digits, whitespace, and `. ( ) - :`; drops
/// everything else (markup, control characters, smart quotes).
pub fn sanitize_description(input: &str) -> String {
    input
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '.' | '(' | ')' | '-' | ':')
        })
        .collect()
}

/// Build the SPDX identifier for a package from its component name and
/// version.
pub fn package_ref(name: &str, version: &str) -> String {
    clean_for_spdx(&format!("SPDXRef-Package-{}-{}", name, version))
}

/// Build a LicenseRef identifier for a license that is not on the SPDX
/// license list. The component name is folded in so equally named custom
/// licenses on different components stay distinct.
pub fn license_ref(license_display: &str, component_name: &str) -> String {
    format!(
        "LicenseRef-{}",
        clean_for_spdx(&format!("{}-{}", license_display, component_name))
    )
}

/// Default output file stem for a project version (extension is added by
/// the selected format).
pub fn default_output_stem(project_name: &str, version_name: &str) -> String {
    clean_for_spdx(&format!("{}-{}", project_name, version_name))
}
