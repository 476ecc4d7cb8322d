//! # Image Uploads

use crate::validation::FileInfo;

/// An uploaded image with its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }
}

impl FileInfo for ImageUpload {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn name(&self) -> &str {
        &self.file_name
    }
}
