//! Registered formatting options.
//!
//! Adding an option means adding a row here. Nothing else in the crate needs
//! to change: resolution, coercion and the catalog all go through this table.
//!
//! Rows are kept in canonical-name order.

use super::types::DefaultValue::{Bool, Int, Str, StrList};
use super::types::OptionSpec;

/// Number of registered options.
pub const OPTION_COUNT: usize = 32;

pub static OPTION_SPECS: [OptionSpec; OPTION_COUNT] = [
    OptionSpec::new(
        "ALIGN_CLOSING_BRACKET_WITH_VISUAL_INDENT",
        Bool(true),
        "Align closing bracket with visual indentation.",
    ),
    OptionSpec::new(
        "ALLOW_MULTILINE_LAMBDAS",
        Bool(false),
        "Allow lambdas to be formatted on more than one line.",
    ),
    OptionSpec::new(
        "BLANK_LINES_AROUND_TOP_LEVEL_DEFINITION",
        Int(2),
        "Number of blank lines surrounding top-level function and class definitions.",
    ),
    OptionSpec::new(
        "BLANK_LINE_BEFORE_NESTED_CLASS_OR_DEF",
        Bool(false),
        "Insert a blank line before a 'def' or 'class' immediately nested within \
         another 'def' or 'class'.",
    ),
    OptionSpec::new(
        "COALESCE_BRACKETS",
        Bool(false),
        "Do not split consecutive brackets. Only relevant when \
         DEDENT_CLOSING_BRACKETS is set.",
    ),
    OptionSpec::new("COLUMN_LIMIT", Int(79), "The column limit."),
    OptionSpec::new(
        "CONTINUATION_INDENT_WIDTH",
        Int(4),
        "Indent width used for line continuations.",
    ),
    OptionSpec::new(
        "DEDENT_CLOSING_BRACKETS",
        Bool(false),
        "Put closing brackets on a separate line, dedented, if the bracketed \
         expression can't fit in a single line.",
    ),
    OptionSpec::new(
        "I18N_COMMENT",
        Str(""),
        "The regex for an i18n comment. The presence of this comment stops \
         reformatting of that line, because the comments are required to be \
         next to the string they translate.",
    ),
    OptionSpec::new(
        "I18N_FUNCTION_CALL",
        StrList(&[]),
        "The i18n function call names. The presence of this function stops \
         reformatting on that line, because the string it has cannot be moved \
         away from the i18n comment.",
    ),
    OptionSpec::new(
        "INDENT_DICTIONARY_VALUE",
        Bool(false),
        "Indent the dictionary value if it cannot fit on the same line as the \
         dictionary key.",
    ),
    OptionSpec::new("INDENT_WIDTH", Int(4), "The number of columns to use for indentation."),
    OptionSpec::new(
        "JOIN_MULTIPLE_LINES",
        Bool(true),
        "Join short lines into one line, e.g. single line 'if' statements.",
    ),
    OptionSpec::new(
        "SPACES_BEFORE_COMMENT",
        Int(2),
        "The number of spaces required before a trailing comment.",
    ),
    OptionSpec::new(
        "SPACE_BETWEEN_ENDING_COMMA_AND_CLOSING_BRACKET",
        Bool(true),
        "Insert a space between the ending comma and closing bracket of a list, etc.",
    ),
    OptionSpec::new(
        "SPLIT_ARGUMENTS_WHEN_COMMA_TERMINATED",
        Bool(false),
        "Split before arguments if the argument list is terminated by a comma.",
    ),
    OptionSpec::new(
        "SPLIT_BEFORE_BITWISE_OPERATOR",
        Bool(true),
        "Set to True to prefer splitting before '&', '|' or '^' rather than after.",
    ),
    OptionSpec::new(
        "SPLIT_BEFORE_DICT_SET_GENERATOR",
        Bool(true),
        "Split before a dictionary or set generator (comp_for).",
    ),
    OptionSpec::new(
        "SPLIT_BEFORE_LOGICAL_OPERATOR",
        Bool(false),
        "Set to True to prefer splitting before 'and' or 'or' rather than after.",
    ),
    OptionSpec::new(
        "SPLIT_BEFORE_NAMED_ASSIGNS",
        Bool(true),
        "Split named assignments onto individual lines.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_AFTER_OPENING_BRACKET",
        Int(30),
        "The penalty for splitting right after the opening bracket.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_AFTER_UNARY_OPERATOR",
        Int(10000),
        "The penalty for splitting the line after a unary operator.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_BEFORE_IF_EXPR",
        Int(0),
        "The penalty for splitting right before an if expression.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_BITWISE_OPERATOR",
        Int(300),
        "The penalty of splitting the line around the '&', '|' and '^' operators.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_COMPREHENSION",
        Int(80),
        "The penalty for splitting a list comprehension or generator expression.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_EXCESS_CHARACTER",
        Int(4500),
        "The penalty for characters over the column limit.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_FOR_ADDED_LINE_SPLIT",
        Int(30),
        "The penalty incurred by adding a line split to the unwrapped line. The \
         more line splits added the higher the penalty.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_IMPORT_NAMES",
        Int(0),
        "The penalty of splitting a list of import names.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_LOGICAL_OPERATOR",
        Int(300),
        "The penalty of splitting the line around the 'and' and 'or' operators.",
    ),
    OptionSpec::new(
        "SPLIT_PENALTY_MATCHING_BRACKET",
        Int(50),
        "The penalty for not matching the splitting decision for the matching \
         bracket tokens.",
    ),
    OptionSpec::new("TAB_WIDTH", Int(8), "The number of columns used for a tab character."),
    OptionSpec::new("USE_TABS", Bool(false), "Use the tab character for indentation."),
];
