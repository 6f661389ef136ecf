//! Package URL (purl) construction from component origin identifiers.
//!
//! The hub server reports a component origin as an external namespace
//! (the forge it was matched against, e.g. `npmjs` or `ubuntu`) plus an
//! external id whose layout depends on that forge. This module maps the
//! namespace to a purl type and splits the external id into name,
//! version and qualifiers following the purl specification.

use super::identifier::strip_quotes;

/// How a hub origin namespace maps onto the purl coordinate scheme.
struct OriginRule {
    package_type: &'static str,
    namespace: &'static str,
    separator: char,
}

impl OriginRule {
    const fn new(package_type: &'static str, namespace: &'static str, separator: char) -> Self {
        OriginRule {
            package_type,
            namespace,
            separator,
        }
    }
}

/// Look up the purl mapping rule for a hub origin namespace.
///
/// Returns `None` for namespaces with no known purl equivalent, in which
/// case no package-manager reference is emitted for the component.
fn origin_rule(external_namespace: &str) -> Option<OriginRule> {
    let rule = match external_namespace {
        "alpine" => OriginRule::new("apk", "alpine", '/'),
        "android" => OriginRule::new("apk", "android", ':'),
        "bitbucket" => OriginRule::new("bitbucket", "", ':'),
        "bower" => OriginRule::new("bower", "", '/'),
        "centos" => OriginRule::new("rpm", "centos", '/'),
        "clearlinux" => OriginRule::new("rpm", "clearlinux", '/'),
        "cpan" => OriginRule::new("cpan", "", '/'),
        "cran" => OriginRule::new("cran", "", '/'),
        "crates" => OriginRule::new("cargo", "", '/'),
        "dart" => OriginRule::new("pub", "", '/'),
        "debian" => OriginRule::new("deb", "debian", '/'),
        "fedora" => OriginRule::new("rpm", "fedora", '/'),
        "gitcafe" => OriginRule::new("gitcafe", "", ':'),
        "github" => OriginRule::new("github", "", ':'),
        "gitlab" => OriginRule::new("gitlab", "", ':'),
        "gitorious" => OriginRule::new("gitorious", "", ':'),
        "golang" => OriginRule::new("golang", "", ':'),
        "hackage" => OriginRule::new("hackage", "", '/'),
        "hex" => OriginRule::new("hex", "", '/'),
        "maven" => OriginRule::new("maven", "", ':'),
        "mongodb" => OriginRule::new("rpm", "mongodb", '/'),
        "npmjs" => OriginRule::new("npm", "", '/'),
        "nuget" => OriginRule::new("nuget", "", '/'),
        "opensuse" => OriginRule::new("rpm", "opensuse", '/'),
        "oracle_linux" => OriginRule::new("rpm", "oracle", '/'),
        "packagist" => OriginRule::new("composer", "", ':'),
        "pear" => OriginRule::new("pear", "", '/'),
        "photon" => OriginRule::new("rpm", "photon", '/'),
        "pypi" => OriginRule::new("pypi", "", '/'),
        "redhat" => OriginRule::new("rpm", "redhat", '/'),
        "ros" => OriginRule::new("deb", "ros", '/'),
        "rubygems" => OriginRule::new("gem", "", '/'),
        "ubuntu" => OriginRule::new("deb", "ubuntu", '/'),
        "yocto" => OriginRule::new("yocto", "", '/'),
        _ => return None,
    };
    Some(rule)
}

/// Normalize a PyPI project name: lowercase, with every run of
/// `- _ .` collapsed to a single hyphen.
fn normalize_pypi_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.to_lowercase().chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Split a leading `<digits>:` epoch prefix off a version string.
fn split_epoch(version: &str) -> (Option<&str>, &str) {
    if let Some((prefix, rest)) = version.split_once(':') {
        if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) {
            return (Some(prefix), rest);
        }
    }
    (None, version)
}

/// Build a purl from a component origin's namespace and external id.
///
/// The external id is split on the namespace's separator: distro-style
/// ids with more than two segments split at the first separator (name
/// first, then version and architecture), while `npmjs` and `maven` ids
/// split at the last separator so scoped names and group/artifact pairs
/// stay intact. An architecture segment becomes an `arch` qualifier and
/// a Debian-style `<digits>:` prefix becomes an `epoch` qualifier.
///
/// # Arguments
/// * `external_namespace` - Origin forge name as reported by the hub
/// * `external_id` - Origin identifier in that forge's layout
///
/// # Returns
/// The purl string, or `None` when the namespace has no purl mapping
pub fn purl_for_origin(external_namespace: &str, external_id: &str) -> Option<String> {
    let rule = origin_rule(external_namespace)?;
    let sep = rule.separator;

    let splits_at_last = matches!(external_namespace, "npmjs" | "maven");
    let segment_count = external_id.split(sep).count();

    let (component_id, component_version) = if !splits_at_last && segment_count > 2 {
        match external_id.split_once(sep) {
            Some((id, ver)) => (id, Some(ver)),
            None => (external_id, None),
        }
    } else if let Some((id, ver)) = external_id.rsplit_once(sep) {
        (id, Some(ver))
    } else {
        (external_id, None)
    };

    let mut purl = format!("pkg:{}", rule.package_type);
    if !rule.namespace.is_empty() {
        purl.push('/');
        purl.push_str(rule.namespace);
    }

    if component_id.contains(sep) {
        for segment in component_id.split(sep) {
            purl.push('/');
            purl.push_str(&strip_quotes(segment));
        }
    } else if external_namespace == "pypi" {
        purl.push('/');
        purl.push_str(&strip_quotes(&normalize_pypi_name(component_id)));
    } else {
        purl.push('/');
        purl.push_str(&strip_quotes(component_id));
    }

    let mut qualifiers: Vec<(&str, String)> = Vec::new();
    if let Some(version) = component_version.filter(|v| !v.is_empty()) {
        let version = match version.split_once(sep) {
            Some((ver, arch)) => {
                qualifiers.push(("arch", strip_quotes(arch)));
                ver
            }
            None => version,
        };
        let (epoch, bare_version) = split_epoch(version);
        purl.push('@');
        purl.push_str(&strip_quotes(bare_version));
        if let Some(epoch) = epoch {
            qualifiers.push(("epoch", epoch.to_string()));
        }
    }

    if !qualifiers.is_empty() {
        purl.push('?');
        let joined = qualifiers
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        purl.push_str(&joined);
    }

    Some(purl)
}
