use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::router::PageVariant;

#[function_component(VideoPage)]
pub fn video_page() -> Html {
    html! {
        <div class="video-page">
            <style>
            {r#".video-page {
                min-height: 100vh;
                background: #000;
                color: #fff;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 2rem;
                padding: 2rem;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            }
            .video-frame {
                width: 100%;
                max-width: 960px;
                aspect-ratio: 16 / 9;
                border: 1px solid rgba(255, 255, 255, 0.1);
                border-radius: 24px;
                overflow: hidden;
            }
            .video-frame iframe {
                width: 100%;
                height: 100%;
                border: 0;
            }
            .back-link {
                color: #a855f7;
                text-decoration: none;
                font-weight: 600;
            }
            "#}
            </style>
            <h1>{format!("{} {}", config::STORE_NAME, config::STORE_TOWN)}</h1>
            <div class="video-frame">
                <iframe
                    src={config::VIDEO_EMBED_URL}
                    title="Video promocional"
                    allow="accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                />
            </div>
            <Link<PageVariant> to={PageVariant::Landing} classes="back-link">
                {"← Volver al inicio"}
            </Link<PageVariant>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_link_targets_landing_root() {
        assert_eq!(PageVariant::Landing.to_path(), "/");
    }

    #[test]
    fn video_page_is_a_component() {
        // Building the vnode only needs the component type to exist.
        let _ = html! { <VideoPage /> };
    }
}
