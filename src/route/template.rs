//! Template-string fragments.
//!
//! A template like `"/referral/:referralId"` compiles into the same two
//! pieces a hand-written definition has: a renderer and a defaults map. Each
//! `:name` placeholder becomes a declared parameter defaulting to its own
//! token, which is what makes the zero-argument render return the template
//! verbatim.

use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use crate::{Params, Route};

use super::FragmentFn;

/// Matches `:name` placeholders in a path template. Placeholder names start
/// with a letter or underscore and continue with letters, digits, or
/// underscores, so a literal `:` followed by anything else passes through
/// untouched.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").unwrap());

/// Compiles a template into a renderer plus auto-derived defaults.
pub(crate) fn compile(template: String) -> (Arc<FragmentFn>, Params) {
    let defaults: Params = PLACEHOLDER
        .captures_iter(&template)
        .map(|caps| (caps[1].to_string(), caps[0].to_string()))
        .collect();

    let render: Arc<FragmentFn> = Arc::new(move |params: &Params| {
        let rendered = PLACEHOLDER.replace_all(&template, |caps: &Captures| {
            // Merged params always carry the token as a fallback value, but
            // render the raw token if a caller replaced the defaults map.
            params.get(&caps[1]).unwrap_or(&caps[0]).to_string()
        });
        Ok(rendered.into_owned())
    });

    (render, defaults)
}

/// Lists the placeholder names a template declares, in order of appearance.
///
/// ```rust
/// use route_conf::template_placeholders;
///
/// let names = template_placeholders("/item/:itemId/variant/:variantId");
/// assert_eq!(names, vec!["itemId", "variantId"]);
/// ```
pub fn template_placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

impl Route {
    /// Returns the placeholder names of a template, or an empty list for
    /// renderers without declared defaults.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.defaults.iter().map(|(name, _)| name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, args: Params) -> String {
        let (render, defaults) = compile(template.to_string());
        render(&args.merged_over(&defaults)).unwrap()
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(render("/shop", Params::new()), "/shop");
    }

    #[test]
    fn test_placeholder_defaults_to_token() {
        assert_eq!(
            render("/referral/:referralId", Params::new()),
            "/referral/:referralId"
        );
    }

    #[test]
    fn test_placeholder_substituted() {
        assert_eq!(
            render("/referral/:referralId", Params::from([("referralId", "1")])),
            "/referral/1"
        );
    }

    #[test]
    fn test_multiple_placeholders_partial_args() {
        assert_eq!(
            render("/item/:itemId/:variantId", Params::from([("itemId", "21")])),
            "/item/21/:variantId"
        );
    }

    #[test]
    fn test_derived_defaults() {
        let (_, defaults) = compile("/item/:itemId/:variantId".to_string());
        assert_eq!(defaults.get("itemId"), Some(":itemId"));
        assert_eq!(defaults.get("variantId"), Some(":variantId"));
    }

    #[test]
    fn test_bare_colon_passes_through() {
        assert_eq!(render("/time/12:30", Params::new()), "/time/12:30");
    }

    #[test]
    fn test_template_placeholders() {
        assert_eq!(
            template_placeholders("/a/:x/b/:y"),
            vec!["x".to_string(), "y".to_string()]
        );
        assert!(template_placeholders("/static").is_empty());
    }

    #[test]
    fn test_parameter_names_on_route() {
        let def = Route::template("/item/:itemId");
        assert_eq!(def.parameter_names(), vec!["itemId"]);
    }
}
