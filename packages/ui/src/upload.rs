use api::ImageFile;
use dioxus::html::FileData;

/// Read picked files into memory for a multipart upload.
/// Files that fail to read are logged and skipped.
pub async fn read_images(files: Vec<FileData>) -> Vec<ImageFile> {
    let mut images = Vec::with_capacity(files.len());
    for file in files {
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                let mut image = ImageFile::new(name, bytes.to_vec());
                if let Some(content_type) = file.content_type() {
                    image = image.with_content_type(content_type);
                }
                images.push(image);
            }
            Err(e) => tracing::error!("Failed to read {}: {:?}", name, e),
        }
    }
    images
}
