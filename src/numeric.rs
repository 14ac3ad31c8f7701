//! Numeric traits
use std::fmt::{Debug, Display};

use num_traits::{Float, NumAssign, NumCast};

/// Anything that can sit in a `Bunch`. Integers included.
pub trait Number: Copy + Clone + Debug + Display + NumAssign + NumCast { }

impl <T> Number for T
where T: Copy + Clone + Debug + Display + NumAssign + NumCast
{
}

/// Our lovable IEEE 754
pub trait Floater: Number + Float { }

impl <T> Floater for T
where T: Number + Float
{
}
