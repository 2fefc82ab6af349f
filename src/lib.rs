/*!

# propescape - Unicode Script property escapes for EcmaScript regex engines

This crate implements the part of an EcmaScript regular expression engine that decides whether a code point matches a Unicode property escape such as `\p{Script=Gurmukhi}`, `\p{sc=Guru}`, or their negated forms `\P{...}`.

# Example: test a code point

```rust
use propescape::Resolver;
let m = Resolver::unicode().compile(r"\p{Script=Gurmukhi}").unwrap();
assert_eq!(m.matches(0x0A3C), Ok(true));
assert_eq!(m.matches(0x0A04), Ok(false));
```

# Example: negated escapes

A negated escape is resolved to the complement of the property's set over the whole code space `[0, 0x10FFFF]`. The complement is computed once, when the escape is resolved, not per code point.

```rust
use propescape::resolve;
let not_guru = resolve("sc", "Guru", true).unwrap();
assert_eq!(not_guru.contains(0x0A04), Ok(true));
assert_eq!(not_guru.contains(0x0A3C), Ok(false));
```

# Example: errors

Unknown property values and unsupported keys are reported when the escape is resolved, before any matching happens. A regex compiler should surface them as a SyntaxError.

```rust
use propescape::{resolve, Error};
assert_eq!(
    resolve("Script", "NotAScript", false).unwrap_err(),
    Error::UnknownProperty("NotAScript".to_string())
);
assert!(resolve("Foo", "Gurmukhi", false).unwrap_err().is_syntax_error());
```

# Supported Syntax

Only `Script` and its short form `sc` are supported as property keys. Values are case-sensitive and must be spelled exactly as a canonical script name (`Gurmukhi`) or one of its aliases (`Guru`); no loose matching is performed. Lone property names like `\p{Gurmukhi}` and other properties such as `General_Category` or `Script_Extensions` are not supported.

# Unicode remarks

The script tables are generated from the Unicode Character Database by the `gen-unicode` tool; see [`UNICODE_VERSION`] for the version. Surrogate code points are valid inputs: they belong to no script, so they never match `\p{...}` and always match `\P{...}`.

# Architecture

A [`PropertyTable`] maps names to [`CodePointSet`]s; the default table is built lazily, once, and shared by all threads. A [`Resolver`] turns a [`PropertyEscape`] into a set, and a [`PropertyMatcher`] tests code points against it by binary search.

*/

#![warn(clippy::all)]
#![allow(clippy::upper_case_acronyms, clippy::should_implement_trait)]
// Clippy's manual_range_contains suggestion produces worse codegen.
#![allow(clippy::manual_range_contains)]
#![cfg_attr(feature = "prohibit-unsafe", forbid(unsafe_code))]

pub use crate::codepointset::{CodePoint, CodePointSet, Interval, CODE_POINT_MAX};
pub use crate::error::{Error, Result};
pub use crate::matchers::{matches, PropertyMatcher};
pub use crate::parse::{parse, PropertyEscape};
pub use crate::resolve::{resolve, PropertyKey, Resolver};
pub use crate::table::{Property, PropertyTable, PropertyTableBuilder};
pub use crate::unicodetables::UNICODE_VERSION;
pub use crate::util::parse_code_point;

mod codepointset;
mod error;
mod matchers;
mod parse;
mod resolve;
mod table;
mod unicodetables;
mod util;
