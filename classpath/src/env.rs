use std::ffi::{c_char, CStr};
use std::ops::Deref;
use std::{ptr, slice};

use anyhow::{bail, Result};
use jni_sys::{JNIEnv, jstring};

use crate::bridge::ManagedStrings;

macro_rules! jni_call {
    ($env: expr, $name: ident $( ,$args: expr )*) => {
        ((**$env).v1_1.$name)($env $( ,$args )*)
    };
}

/// The per-call JNI environment handed to a native method.
pub struct JniEnv {
    raw: *mut JNIEnv
}

impl JniEnv {
    /// # Safety
    ///
    /// `raw` must be null or the environment pointer of the current native
    /// call, and must stay valid while the returned value is used.
    pub unsafe fn from_raw(raw: *mut JNIEnv) -> Option<Self> {
        if raw.is_null() || (*raw).is_null() {
            None
        } else {
            Some(Self { raw })
        }
    }

    // Any pending throwable would surface in the caller once we return.
    fn clear_exception(&self) {
        unsafe { jni_call!(self.raw, ExceptionClear) }
    }
}

/// Characters obtained with `GetStringUTFChars`, released on drop.
pub struct UtfChars<'e> {
    env: &'e JniEnv,
    string: jstring,
    chars: *const c_char,
    len: usize,
}

impl Deref for UtfChars<'_> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        unsafe { slice::from_raw_parts(self.chars as *const u8, self.len) }
    }
}

impl Drop for UtfChars<'_> {
    fn drop(&mut self) {
        unsafe { jni_call!(self.env.raw, ReleaseStringUTFChars, self.string, self.chars) }
    }
}

impl ManagedStrings for JniEnv {
    type Handle = jstring;
    type Chars<'s> = UtfChars<'s>;

    fn chars(&self, string: jstring) -> Result<UtfChars<'_>> {
        if string.is_null() {
            bail!("null string reference");
        }

        let chars = unsafe { jni_call!(self.raw, GetStringUTFChars, string, ptr::null_mut()) };

        if chars.is_null() {
            self.clear_exception();
            bail!("GetStringUTFChars failed");
        }

        let len = unsafe { CStr::from_ptr(chars).to_bytes().len() };

        Ok(UtfChars { env: self, string, chars, len })
    }

    fn new_string(&self, utf: &CStr) -> Result<jstring> {
        let string = unsafe { jni_call!(self.raw, NewStringUTF, utf.as_ptr()) };

        if string.is_null() {
            self.clear_exception();
            bail!("NewStringUTF failed");
        }

        Ok(string)
    }
}
