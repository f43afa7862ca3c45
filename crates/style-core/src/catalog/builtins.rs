//! Built-in named styles.
//!
//! Each style is written as overrides on top of an earlier style, in the same
//! `key = value` text a user would put in a style file. The catalog applies
//! them with the resolver's override step when it is first built.

/// Name of the style used when no style source is given.
pub const DEFAULT_STYLE: &str = "pep8";

/// A named style expressed as overrides on an earlier entry.
#[derive(Debug, Clone, Copy)]
pub struct StyleDefinition {
    pub name: &'static str,
    /// `None` means the registry defaults
    pub based_on: Option<&'static str>,
    pub overrides: &'static [(&'static str, &'static str)],
}

/// Number of built-in styles.
pub const BUILTIN_COUNT: usize = 4;

/// Definitions in build order. A style may only be based on one defined
/// before it.
pub static BUILTIN_STYLES: [StyleDefinition; BUILTIN_COUNT] = [
    StyleDefinition {
        name: "pep8",
        based_on: None,
        overrides: &[],
    },
    StyleDefinition {
        name: "google",
        based_on: Some("pep8"),
        overrides: &[
            ("BLANK_LINE_BEFORE_NESTED_CLASS_OR_DEF", "true"),
            ("COLUMN_LIMIT", "80"),
            ("I18N_COMMENT", r"#\..*"),
            ("I18N_FUNCTION_CALL", "N_, _"),
            ("INDENT_WIDTH", "2"),
            ("SPACE_BETWEEN_ENDING_COMMA_AND_CLOSING_BRACKET", "false"),
            ("SPLIT_BEFORE_BITWISE_OPERATOR", "false"),
            ("SPLIT_BEFORE_LOGICAL_OPERATOR", "false"),
        ],
    },
    StyleDefinition {
        name: "chromium",
        based_on: Some("google"),
        overrides: &[
            ("ALLOW_MULTILINE_LAMBDAS", "true"),
            ("INDENT_DICTIONARY_VALUE", "true"),
            ("JOIN_MULTIPLE_LINES", "false"),
        ],
    },
    StyleDefinition {
        name: "facebook",
        based_on: Some("pep8"),
        overrides: &[
            ("ALIGN_CLOSING_BRACKET_WITH_VISUAL_INDENT", "false"),
            ("COLUMN_LIMIT", "80"),
            ("DEDENT_CLOSING_BRACKETS", "true"),
            ("INDENT_DICTIONARY_VALUE", "true"),
            ("JOIN_MULTIPLE_LINES", "false"),
            ("SPLIT_BEFORE_BITWISE_OPERATOR", "false"),
            ("SPLIT_PENALTY_AFTER_OPENING_BRACKET", "0"),
            ("SPLIT_PENALTY_BEFORE_IF_EXPR", "30"),
        ],
    },
];
