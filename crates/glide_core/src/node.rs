//! Opaque handles for host-discovered elements
//!
//! The host mints a `NodeId` for every element it discovers (container,
//! items, buttons, track, thumb, media). The engine only ever stores and
//! compares these handles; all measurement and style application goes back
//! through the host.

use slotmap::new_key_type;

new_key_type! {
    /// Handle to one element on the host surface.
    pub struct NodeId;
}
