//! D-Bus proxies for the xdg-desktop-portal interfaces the backend calls.
//!
//! Methods that start a request return the path of an
//! `org.freedesktop.portal.Request` object; the result arrives later as that
//! object's `Response` signal (see [`super::request`]).

use std::collections::HashMap;

use zbus::proxy;
use zbus::zvariant::{Fd, ObjectPath, OwnedObjectPath, Value};

/// `a{sv}` option dictionaries passed to every portal method.
pub type Options<'a> = HashMap<&'a str, Value<'a>>;

#[proxy(
    interface = "org.freedesktop.portal.RemoteDesktop",
    default_service = "org.freedesktop.portal.Desktop",
    default_path = "/org/freedesktop/portal/desktop"
)]
pub trait RemoteDesktop {
    fn create_session(&self, options: Options<'_>) -> zbus::Result<OwnedObjectPath>;

    fn select_devices(
        &self,
        session_handle: &ObjectPath<'_>,
        options: Options<'_>,
    ) -> zbus::Result<OwnedObjectPath>;

    fn start(
        &self,
        session_handle: &ObjectPath<'_>,
        parent_window: &str,
        options: Options<'_>,
    ) -> zbus::Result<OwnedObjectPath>;

    fn notify_keyboard_keysym(
        &self,
        session_handle: &ObjectPath<'_>,
        options: Options<'_>,
        keysym: i32,
        state: u32,
    ) -> zbus::Result<()>;

    fn notify_pointer_button(
        &self,
        session_handle: &ObjectPath<'_>,
        options: Options<'_>,
        button: i32,
        state: u32,
    ) -> zbus::Result<()>;

    fn notify_pointer_motion(
        &self,
        session_handle: &ObjectPath<'_>,
        options: Options<'_>,
        dx: f64,
        dy: f64,
    ) -> zbus::Result<()>;

    fn notify_pointer_axis(
        &self,
        session_handle: &ObjectPath<'_>,
        options: Options<'_>,
        dx: f64,
        dy: f64,
    ) -> zbus::Result<()>;

    /// Bitmask of device types the compositor can emulate.
    #[zbus(property)]
    fn available_device_types(&self) -> zbus::Result<u32>;

    /// Interface version; restore tokens need version 2.
    #[zbus(property, name = "version")]
    fn version(&self) -> zbus::Result<u32>;
}

#[proxy(
    interface = "org.freedesktop.portal.Secret",
    default_service = "org.freedesktop.portal.Desktop",
    default_path = "/org/freedesktop/portal/desktop"
)]
pub trait Secret {
    /// Writes the application secret to `fd` and closes it.
    fn retrieve_secret(&self, fd: Fd<'_>, options: Options<'_>) -> zbus::Result<OwnedObjectPath>;
}

#[proxy(
    interface = "org.freedesktop.portal.Session",
    default_service = "org.freedesktop.portal.Desktop"
)]
pub trait Session {
    fn close(&self) -> zbus::Result<()>;
}
