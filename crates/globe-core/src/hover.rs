use crate::camera::{PerspectiveCamera, Viewport};
use crate::destinations::Destination;
use crate::raycast::{Intersection, PickSphere, Raycaster};
use glam::Vec2;

/// What the destination pop-up should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Popup {
    Hidden,
    Shown { name: String, description: String },
}

impl Popup {
    pub fn for_destination(destination: Option<&Destination>) -> Self {
        match destination {
            Some(d) => Popup::Shown {
                name: d.name.clone(),
                description: d.description.clone(),
            },
            None => Popup::Hidden,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self, Popup::Shown { .. })
    }
}

/// Nearest pick sphere under the pointer, if any.
///
/// `pointer_px` is in viewport pixels with the origin at the top-left.
pub fn pick_nearest<I>(
    camera: &PerspectiveCamera,
    viewport: &Viewport,
    pointer_px: Vec2,
    spheres: I,
) -> Option<Intersection>
where
    I: IntoIterator<Item = PickSphere>,
{
    let ndc = viewport.to_ndc(pointer_px);
    let raycaster = Raycaster::new(camera.ray_from_ndc(ndc));
    raycaster.intersect_spheres(spheres).first().copied()
}
