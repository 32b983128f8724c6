mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod accessories;
pub use accessories::Accessories;

mod blogs;
pub use blogs::AddBlog;

mod banner;
pub use banner::Banner;

mod reviews;
pub use reviews::{ReviewPage, ShowReview};

mod hero;
pub use hero::HeroSection;

mod login;
pub use login::Login;
