//! Native half of `java.lang.System.getProperty`.
//!
//! The runtime consults [`Java_java_lang_System_getProperty`] for the few
//! properties whose values originate on the native side. A null return means
//! "no rule here"; the managed caller then falls back to its own store.

use std::ffi::c_void;
use std::ptr;

use ctor::ctor;
use jni_sys::{jclass, jint, JavaVM, JNIEnv, jstring, JNI_VERSION_1_6};
use once_cell::sync::Lazy;

use crate::env::JniEnv;
use crate::props::PropertyTable;
use crate::resolver::Resolver;

pub mod bridge;
pub mod env;
pub mod logs;
pub mod mutf8;
pub mod props;
pub mod resolver;

static PROPERTIES: Lazy<PropertyTable> = Lazy::new(PropertyTable::builtin);

#[ctor]
fn init() {
    common::logs::init_logger("Classpath-Native");
}

pub fn properties() -> &'static PropertyTable {
    &PROPERTIES
}

#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    common::ffi::guard("JNI_OnLoad", JNI_VERSION_1_6, || {
        let table = Lazy::force(&PROPERTIES);
        let keys: Vec<_> = table.keys().collect();

        info!("native properties ready: {:?}", keys);

        JNI_VERSION_1_6
    })
}

#[no_mangle]
#[allow(non_snake_case, clippy::not_unsafe_ptr_arg_deref)]
pub extern "system" fn Java_java_lang_System_getProperty(env: *mut JNIEnv, _class: jclass, key: jstring) -> jstring {
    common::ffi::guard("getProperty", ptr::null_mut(), || {
        let Some(env) = (unsafe { JniEnv::from_raw(env) }) else {
            warn!("getProperty called without an environment");
            return ptr::null_mut()
        };

        Resolver::new(properties())
            .resolve(&env, key)
            .unwrap_or(ptr::null_mut())
    })
}
