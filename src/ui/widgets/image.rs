use crate::ui::element::{Element, Frame};
use crate::ui::render::Renderer;
use std::path::{Path, PathBuf};

/// Bitmap loaded from a file
pub struct ImageElement {
    frame: Frame,
    pub path: PathBuf,
}

impl ImageElement {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            frame: Frame::default(),
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Element for ImageElement {
    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn render(&self, r: &mut dyn Renderer, origin: (i32, i32)) {
        r.image(self.frame.rect().offset(origin.0, origin.1), &self.path);
    }
}
