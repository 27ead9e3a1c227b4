//! Root component: the zoomable images on the page.
//!
//! Section layout and static copy live in the page's HTML/CSS; this component
//! only mounts the single detail viewer shared by the gallery photos and the
//! directions notice.

use leptos::prelude::*;

use crate::components::detail_viewer::{DetailViewer, ViewerImage};

const IMAGES: &[ViewerImage] = &[
    ViewerImage { src: "images/gallery-1.jpg", alt: "Gallery image 1" },
    ViewerImage { src: "images/gallery-2.jpg", alt: "Gallery image 2" },
    ViewerImage { src: "images/gallery-3.jpg", alt: "Gallery image 3" },
    ViewerImage { src: "images/gallery-4.jpg", alt: "Gallery image 4" },
    ViewerImage { src: "images/gallery-5.jpg", alt: "Gallery image 5" },
    ViewerImage { src: "images/gallery-6.jpg", alt: "Gallery image 6" },
    ViewerImage { src: "images/traffic-notice.png", alt: "Traffic notice" },
];

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <DetailViewer images=IMAGES.to_vec() />
        </main>
    }
}
