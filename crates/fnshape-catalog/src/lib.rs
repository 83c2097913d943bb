//! Ready-made shape bindings for fnshape.
//!
//! Every constructor returns a concrete closure wrapper with a documented
//! policy. Expected failure cases fail soft rather than raising:
//! - absent text: containment tests return false, length returns 0, trim
//!   passes the absent value through unchanged
//! - unparsable text: parsing returns 0

pub mod numeric;
pub mod random;
pub mod text;
