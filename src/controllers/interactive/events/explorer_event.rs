use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::actions::render_fractal::render_fractal::RenderError;
use crate::core::data::zoom_gesture::ZoomRect;

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerEvent {
    /// A complete frame replacing everything previously drawn.
    Frame(FrameData),
    /// Square to outline while a zoom drag is in progress; `None` clears it.
    ZoomFeedback(Option<ZoomRect>),
    Error { generation: u64, error: RenderError },
}
