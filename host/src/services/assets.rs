use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

/// Resolves `path` inside `dir`. Unknown paths get `index.html` so the
/// client can handle them; only a bundle without an index yields a 404.
fn serve_from(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file(INDEX) {
            Some(index) => {
                debug!("No embedded asset at /{}, serving {}", file_path, INDEX);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}
