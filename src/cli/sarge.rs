use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::{InputArg, OutputArg, normalize_input, normalize_output};

impl ArgumentType for InputArg {
    type Error = Infallible;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let token = val.map(str::trim).filter(|s| !s.is_empty());
        Some(Ok(match token {
            Some(token) => InputArg(normalize_input(token)),
            None => InputArg::default(),
        }))
    }

    fn default_value() -> Option<Self> {
        Some(InputArg::default())
    }
}

impl ArgumentType for OutputArg {
    type Error = Infallible;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let token = val.map(str::trim).filter(|s| !s.is_empty());
        Some(Ok(match token {
            Some(token) => OutputArg(normalize_output(token)),
            None => OutputArg::default(),
        }))
    }

    fn default_value() -> Option<Self> {
        Some(OutputArg::default())
    }
}
