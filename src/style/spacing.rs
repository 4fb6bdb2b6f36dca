use crate::scene::SceneNode;
use crate::style::format::add_px;
use crate::style::shorthand::optimize_space;
use crate::types::PropMap;

/// Padding as `p`/`px`/`py`/`pt`/`pr`/`pb`/`pl`, reduced to the fewest keys.
///
/// A node without any non-zero padding gets no padding property at all.
pub fn get_padding_props(node: &SceneNode) -> PropMap {
    let [top, right, bottom, left] = node.paddings();
    if [top, right, bottom, left].iter().all(|side| add_px(*side).is_none()) {
        return PropMap::new();
    }
    optimize_space("p", top, right, bottom, left)
}
