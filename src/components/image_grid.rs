// ============================================================================
// IMAGE GRID COMPONENT - Galería de imágenes subidas
// ============================================================================

use yew::prelude::*;

use crate::views::{GridView, ImageTile};

#[derive(Properties, PartialEq)]
pub struct ImageGridProps {
    pub grid: GridView,
    pub on_refresh: Callback<()>,
}

#[function_component(ImageGrid)]
pub fn image_grid(props: &ImageGridProps) -> Html {
    let onclick = props.on_refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="gallery">
            <div class="gallery-header">
                <h3>{"All Images"}</h3>
                <button type="button" class="btn-refresh" onclick={onclick}>
                    {"Refresh"}
                </button>
            </div>

            {
                match &props.grid {
                    GridView::Empty(message) => html! {
                        <p class="gallery-empty">{*message}</p>
                    },
                    GridView::Tiles(tiles) => html! {
                        <div class="gallery-grid">
                            { for tiles.iter().map(render_tile) }
                        </div>
                    },
                }
            }
        </div>
    }
}

fn render_tile(tile: &ImageTile) -> Html {
    html! {
        <a
            key={tile.key.clone()}
            class="gallery-item"
            href={tile.href.clone()}
            target="_blank"
            rel="noreferrer"
            title={tile.title.clone()}
        >
            <img src={tile.src.clone()} alt={tile.alt.clone()} />
            <div class="gallery-caption">{tile.caption.clone()}</div>
        </a>
    }
}
