//! A scripted native layer for tests.
//!
//! The enumeration entry points are real `extern "system"` functions so the
//! raw two-call protocol is exercised end to end. They log every call into a
//! thread-local, which [`MockPlatform::new`] and [`reset_calls`] clear.

use std::{
    cell::{Cell, RefCell},
    ffi::{c_char, CStr},
};

use ash::{prelude::VkResult, vk};

use crate::{platform::Platform, ExtensionRecord};

/// The handle every successful mock creation returns.
pub const HANDLE: u64 = 0xC0FFEE;

const NAMES: [(&CStr, u32); 3] = [
    (c"VK_KHR_surface", 25),
    (c"VK_KHR_xlib_surface", 6),
    (c"VK_EXT_debug_utils", 2),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Call {
    layer: Option<String>,
    /// The buffer capacity, `None` for the count query.
    capacity: Option<u32>,
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
}

pub fn reset_calls() {
    CALLS.with(|calls| calls.borrow_mut().clear());
}

/// The capacity passed to each call, `None` for the count queries.
pub fn fetch_calls() -> Vec<Option<u32>> {
    CALLS.with(|calls| calls.borrow().iter().map(|c| c.capacity).collect())
}

pub fn seen_layers() -> Vec<Option<String>> {
    CALLS.with(|calls| calls.borrow().iter().map(|c| c.layer.clone()).collect())
}

/// The records the scripted functions report, in order.
pub fn three_records() -> Vec<ExtensionRecord> {
    NAMES
        .iter()
        .map(|(name, spec_version)| ExtensionRecord {
            name: name.to_str().unwrap().to_owned(),
            spec_version: *spec_version,
        })
        .collect()
}

unsafe fn record(layer: *const c_char, count: *mut u32, properties: *mut vk::ExtensionProperties) {
    let layer = if layer.is_null() {
        None
    } else {
        Some(CStr::from_ptr(layer).to_string_lossy().into_owned())
    };
    let capacity = if properties.is_null() { None } else { Some(*count) };
    CALLS.with(|calls| calls.borrow_mut().push(Call { layer, capacity }));
}

/// Writes up to `available` of [`NAMES`], honouring the capacity in `count`.
unsafe fn write(available: u32, count: *mut u32, properties: *mut vk::ExtensionProperties) -> vk::Result {
    if properties.is_null() {
        *count = available;
        return vk::Result::SUCCESS;
    }
    let written = (*count).min(available);
    for (i, (name, spec_version)) in NAMES.iter().take(written as usize).enumerate() {
        let dst = &mut *properties.add(i);
        for (d, s) in dst.extension_name.iter_mut().zip(name.to_bytes_with_nul()) {
            *d = *s as c_char;
        }
        dst.spec_version = *spec_version;
    }
    *count = written;
    if written < available {
        vk::Result::INCOMPLETE
    } else {
        vk::Result::SUCCESS
    }
}

unsafe extern "system" fn success_three(
    layer: *const c_char,
    count: *mut u32,
    properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    record(layer, count, properties);
    write(3, count, properties)
}

unsafe extern "system" fn success_empty(
    layer: *const c_char,
    count: *mut u32,
    properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    record(layer, count, properties);
    write(0, count, properties)
}

unsafe extern "system" fn shrinks_to_one(
    layer: *const c_char,
    count: *mut u32,
    properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    record(layer, count, properties);
    if properties.is_null() {
        write(3, count, properties)
    } else {
        *count = 1;
        write(1, count, properties)
    }
}

unsafe extern "system" fn grows(
    layer: *const c_char,
    count: *mut u32,
    properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    record(layer, count, properties);
    if properties.is_null() {
        *count = 3;
        vk::Result::SUCCESS
    } else {
        match write(3, count, properties) {
            vk::Result::SUCCESS => vk::Result::INCOMPLETE,
            status => status,
        }
    }
}

unsafe extern "system" fn layer_not_present(
    layer: *const c_char,
    count: *mut u32,
    properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    record(layer, count, properties);
    vk::Result::ERROR_LAYER_NOT_PRESENT
}

pub const SUCCESS_THREE: vk::PFN_vkEnumerateInstanceExtensionProperties = success_three;
pub const SUCCESS_EMPTY: vk::PFN_vkEnumerateInstanceExtensionProperties = success_empty;
pub const SHRINKS_TO_ONE: vk::PFN_vkEnumerateInstanceExtensionProperties = shrinks_to_one;
pub const GROWS: vk::PFN_vkEnumerateInstanceExtensionProperties = grows;
pub const LAYER_NOT_PRESENT: vk::PFN_vkEnumerateInstanceExtensionProperties = layer_not_present;

/// What the last `create_instance` call was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    pub application_name: String,
    pub api_version: u32,
    pub layers: Vec<String>,
}

pub struct MockPlatform {
    create_status: vk::Result,
    enumerate: Option<vk::PFN_vkEnumerateInstanceExtensionProperties>,
    request: RefCell<Option<CreateRequest>>,
    resolved: RefCell<Vec<String>>,
    destroyed: Cell<u32>,
}

impl MockPlatform {
    /// Creates instances successfully; `enumerate` is what the lookup
    /// returns, `None` simulating a resolution failure.
    pub fn new(enumerate: Option<vk::PFN_vkEnumerateInstanceExtensionProperties>) -> Self {
        reset_calls();
        Self {
            create_status: vk::Result::SUCCESS,
            enumerate,
            request: RefCell::default(),
            resolved: RefCell::default(),
            destroyed: Cell::new(0),
        }
    }

    /// Fails every instance creation with `status`.
    pub fn failing_creation(status: vk::Result) -> Self {
        Self {
            create_status: status,
            ..Self::new(Some(SUCCESS_THREE))
        }
    }

    pub fn last_request(&self) -> Option<CreateRequest> {
        self.request.borrow().clone()
    }

    pub fn resolved(&self) -> Vec<String> {
        self.resolved.borrow().clone()
    }

    pub fn destroyed(&self) -> u32 {
        self.destroyed.get()
    }
}

unsafe impl Platform for MockPlatform {
    type Handle = u64;

    fn create_instance(&self, create_info: &vk::InstanceCreateInfo<'_>) -> VkResult<u64> {
        let application_info = unsafe { &*create_info.p_application_info };
        let layers = if create_info.enabled_layer_count == 0 {
            Vec::new()
        } else {
            unsafe {
                std::slice::from_raw_parts(
                    create_info.pp_enabled_layer_names,
                    create_info.enabled_layer_count as usize,
                )
            }
            .iter()
            .map(|name| unsafe { CStr::from_ptr(*name) }.to_string_lossy().into_owned())
            .collect()
        };
        *self.request.borrow_mut() = Some(CreateRequest {
            application_name: unsafe { CStr::from_ptr(application_info.p_application_name) }
                .to_string_lossy()
                .into_owned(),
            api_version: application_info.api_version,
            layers,
        });

        match self.create_status {
            vk::Result::SUCCESS => Ok(HANDLE),
            status => Err(status),
        }
    }

    fn instance_proc_addr(&self, instance: &u64, name: &CStr) -> vk::PFN_vkVoidFunction {
        assert_eq!(*instance, HANDLE);
        self.resolved
            .borrow_mut()
            .push(name.to_string_lossy().into_owned());
        if name != c"vkEnumerateInstanceExtensionProperties" {
            return None;
        }
        self.enumerate.map(|f| unsafe {
            std::mem::transmute::<
                vk::PFN_vkEnumerateInstanceExtensionProperties,
                unsafe extern "system" fn(),
            >(f)
        })
    }

    unsafe fn destroy_instance(&self, instance: &u64) {
        assert_eq!(*instance, HANDLE);
        self.destroyed.set(self.destroyed.get() + 1);
    }
}
