// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use eventline::{debug, info, warn};

use babymagic_core::{
    AspectConstraint, EditorEvent, EditorRequest, EditorResponse, EncodedImage, ImagePayload,
    Point, Surface,
};
use babymagic_crop::{EditorState, SourceImage, ingest};

use crate::cli::{Args, Cmd, CropArgs};
use crate::config::BabyMagicConfig;
use crate::paths::{default_output_path, ensure_parent_dir};
use crate::print::{print_inspect, print_presets, print_response, print_saved};

pub fn run(args: Args, cfg: &BabyMagicConfig) -> Result<(), String> {
    info!("starting babymagic");
    debug!("parsed args: {:?}", args.cmd);

    match args.cmd {
        Cmd::Presets => print_presets(),

        Cmd::Inspect { image } => {
            let src = read_source(&image)?;
            print_inspect(&image, &src);
        }

        Cmd::Crop(crop) => match run_crop(&crop, cfg)? {
            CropOutcome::Saved { path, image } => print_saved(&path, &image),
            CropOutcome::DataUrl(url) => println!("{url}"),
            CropOutcome::Preview(status) => print_response(status),
        },
    }

    info!("babymagic done");
    Ok(())
}

#[derive(Debug)]
pub enum CropOutcome {
    Saved { path: PathBuf, image: EncodedImage },
    DataUrl(String),
    Preview(EditorResponse),
}

pub fn run_crop(args: &CropArgs, cfg: &BabyMagicConfig) -> Result<CropOutcome, String> {
    let bytes = std::fs::read(&args.image)
        .map_err(|e| format!("failed to read {}: {e}", args.image.display()))?;

    // Header only; the full decode happens at confirm.
    let natural = SourceImage::from_bytes(bytes.clone())
        .map_err(|e| format!("{}: {e}", args.image.display()))?
        .natural();

    let surface = args
        .surface
        .unwrap_or_else(|| Surface::new(natural.width as f64, natural.height as f64));

    let aspect = args.constraint(cfg.default_aspect);
    let quality = args.quality.unwrap_or(cfg.jpeg_quality);
    debug!(
        "crop {}: natural {}x{}, surface {}x{}, aspect {aspect}, quality {quality}",
        args.image.display(),
        natural.width,
        natural.height,
        surface.width,
        surface.height
    );

    let requests = build_requests(args, ImagePayload::Bytes(bytes), surface, aspect);
    let mut state = EditorState::new().with_quality(quality);
    let events = replay(&mut state, &requests)?;

    if args.dry_run {
        return Ok(CropOutcome::Preview(
            state.handle_request(&EditorRequest::Status, |_| {}),
        ));
    }

    let image = events
        .into_iter()
        .find_map(|ev| match ev {
            EditorEvent::CropConfirmed { image } => Some(image),
            _ => None,
        })
        .ok_or_else(|| "crop was not confirmed".to_string())?;

    if args.data_url {
        return Ok(CropOutcome::DataUrl(ingest::to_data_url(&image)));
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(cfg, "jpg"));
    write_output(&path, &image)?;
    info!("crop saved: {}", path.display());

    Ok(CropOutcome::Saved { path, image })
}

/// Gestures start at the origin and end at (dx, dy) in surface pixels.
pub fn build_requests(
    args: &CropArgs,
    payload: ImagePayload,
    surface: Surface,
    aspect: AspectConstraint,
) -> Vec<EditorRequest> {
    let mut reqs = vec![
        EditorRequest::Open { payload, surface },
        EditorRequest::SetAspect { aspect },
    ];

    if let Some(rect) = args.rect {
        reqs.push(EditorRequest::SetRect { rect });
    }

    for g in &args.drags {
        reqs.push(EditorRequest::BeginDrag {
            kind: g.kind,
            pointer: Point::default(),
        });
        reqs.push(EditorRequest::DragTo {
            pointer: Point::new(g.dx, g.dy),
        });
        reqs.push(EditorRequest::EndDrag);
    }

    if !args.dry_run {
        reqs.push(EditorRequest::Confirm);
    }

    reqs
}

fn replay(state: &mut EditorState, reqs: &[EditorRequest]) -> Result<Vec<EditorEvent>, String> {
    let mut events = Vec::new();

    for req in reqs {
        if let EditorResponse::Error { message } = state.handle_request(req, |ev| events.push(ev)) {
            warn!("request failed: {message}");
            return Err(message);
        }
    }

    if let Some(EditorEvent::CropPreview { rect }) = events
        .iter()
        .rev()
        .find(|ev| matches!(ev, EditorEvent::CropPreview { .. }))
    {
        debug!("final selection: {rect}");
    }

    Ok(events)
}

fn read_source(path: &Path) -> Result<SourceImage, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    SourceImage::from_bytes(bytes).map_err(|e| format!("{}: {e}", path.display()))
}

fn write_output(path: &Path, image: &EncodedImage) -> Result<(), String> {
    ensure_parent_dir(path).map_err(|e| format!("create output dir: {e}"))?;
    std::fs::write(path, &image.bytes)
        .map_err(|e| format!("failed to write {}: {e}", path.display()))
}
