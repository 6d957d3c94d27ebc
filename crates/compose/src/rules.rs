//! Declarative inclusion rules.
//!
//! Each region lists its optional elements as `(predicate, builder)` pairs in
//! display order. Evaluating a list yields unpositioned [`Fragment`]s; placing
//! them on the page is a separate step, so the inclusion policy can be checked
//! without any geometry.

use flyer_doctree::{ImageRole, TextRole};
use flyer_style::{ImageShape, ObjectFit, TextStyle};
use flyer_types::{ImageRef, Size};

/// Content chosen for a region, not yet positioned.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text {
        role: TextRole,
        content: String,
        style: TextStyle,
    },
    Image {
        role: ImageRole,
        src: ImageRef,
        shape: ImageShape,
        fit: ObjectFit,
        /// Largest box the image may take; it shrinks if the region is full.
        max_size: Size,
    },
}

impl Fragment {
    pub fn text(role: TextRole, content: impl Into<String>, style: TextStyle) -> Self {
        Fragment::Text {
            role,
            content: content.into(),
            style,
        }
    }

    pub fn text_role(&self) -> Option<TextRole> {
        match self {
            Fragment::Text { role, .. } => Some(*role),
            Fragment::Image { .. } => None,
        }
    }

    pub fn image_role(&self) -> Option<ImageRole> {
        match self {
            Fragment::Image { role, .. } => Some(*role),
            Fragment::Text { .. } => None,
        }
    }
}

/// One optional element of a region.
pub struct InclusionRule<C> {
    pub name: &'static str,
    pub applies: fn(&C) -> bool,
    pub build: fn(&C) -> Fragment,
}

impl<C> InclusionRule<C> {
    pub const fn new(name: &'static str, applies: fn(&C) -> bool, build: fn(&C) -> Fragment) -> Self {
        Self { name, applies, build }
    }
}

/// Predicate for elements that are shown unconditionally.
pub fn always<C>(_: &C) -> bool {
    true
}

/// Evaluates `rules` in order, keeping the fragments whose predicate holds.
pub fn evaluate<C>(rules: &[InclusionRule<C>], ctx: &C) -> Vec<Fragment> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.build)(ctx))
        .collect()
}

/// Names of the rules that would fire for `ctx`, in order.
pub fn included<'r, C>(rules: &'r [InclusionRule<C>], ctx: &C) -> Vec<&'r str> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| rule.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ctx {
        label: Option<&'static str>,
    }

    const RULES: &[InclusionRule<Ctx>] = &[
        InclusionRule::new(
            "label",
            |c| c.label.is_some(),
            |c| Fragment::text(TextRole::FooterText, c.label.unwrap_or_default(), TextStyle::default()),
        ),
        InclusionRule::new("fixed", always, |_| {
            Fragment::text(TextRole::Address, "fixed", TextStyle::default())
        }),
    ];

    #[test]
    fn test_evaluate_keeps_rule_order() {
        let fragments = evaluate(RULES, &Ctx { label: Some("hello") });
        let roles: Vec<_> = fragments.iter().filter_map(Fragment::text_role).collect();
        assert_eq!(roles, vec![TextRole::FooterText, TextRole::Address]);
    }

    #[test]
    fn test_failed_predicate_omits_fragment() {
        let ctx = Ctx { label: None };
        assert_eq!(included(RULES, &ctx), vec!["fixed"]);
        assert_eq!(evaluate(RULES, &ctx).len(), 1);
    }
}
