use std::ffi::CStr;
use std::ops::Deref;

use anyhow::Result;

/// The managed runtime's string representation, as seen from native code.
pub trait ManagedStrings {
    /// Borrowed reference to a managed string, valid for one native call.
    type Handle: Copy;

    /// Scoped native copy of a string's characters in modified UTF-8,
    /// without the terminating NUL. Dropping it releases the copy.
    type Chars<'s>: Deref<Target = [u8]> where Self: 's;

    fn chars(&self, string: Self::Handle) -> Result<Self::Chars<'_>>;

    /// Allocates a new managed string whose ownership goes to the caller.
    fn new_string(&self, utf: &CStr) -> Result<Self::Handle>;
}
