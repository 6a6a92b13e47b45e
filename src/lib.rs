pub mod convert;
pub mod directive;
pub mod exit_codes;
pub mod init;
pub mod output;
pub mod parser;
pub mod registry;
pub mod resolve;
pub mod style;
pub mod validate;

pub use directive::{Directive, DirectiveKind, ParamKind, ParamMap, ParamValue};
pub use parser::{ParseError, ParseErrorKind};
pub use resolve::{EffectiveRule, EffectiveStyle};
pub use style::{Item, SourceLine, StyleDocument, StyleError};
pub use validate::{Severity, StyleWarning, WarningKind, check_content, validate};
