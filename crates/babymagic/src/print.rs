// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use babymagic_core::{AspectPreset, EditorResponse, EncodedImage};
use babymagic_crop::SourceImage;

pub fn print_presets() {
    for p in AspectPreset::ALL {
        match p.constraint().ratio() {
            Some(r) => println!("{:<6} {:<18} {r:.4}", p.key(), p.label()),
            None => println!("{:<6} {:<18} -", p.key(), p.label()),
        }
    }
}

pub fn print_inspect(path: &Path, src: &SourceImage) {
    let n = src.natural();
    let format = src
        .format()
        .map(|f| format!("{f:?}").to_lowercase())
        .unwrap_or_else(|| "unknown".into());
    println!("{}: {}x{} {format}", path.display(), n.width, n.height);
}

pub fn print_response(resp: EditorResponse) {
    match resp {
        EditorResponse::Ok => println!("ok"),

        EditorResponse::Status {
            editing,
            dragging,
            has_image,
            rect,
            aspect,
        } => {
            println!("editing: {editing}");
            println!("dragging: {dragging}");
            println!("has_image: {has_image}");
            match rect {
                Some(r) => println!("rect: {r}"),
                None => println!("rect: none"),
            }
            match aspect {
                Some(a) => println!("aspect: {a}"),
                None => println!("aspect: none"),
            }
        }

        EditorResponse::Error { message } => eprintln!("error: {message}"),
    }
}

pub fn print_saved(path: &Path, image: &EncodedImage) {
    println!("{} ({}x{})", path.display(), image.width, image.height);
}
