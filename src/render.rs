use crowd_core::{DrawList, FontStyle, Primitive, Rgba, TextAnchor};
use std::f64::consts::TAU;
use web_sys as web;

/// `rgba(r, g, b, a)` for a canvas fill or stroke style.
pub fn css_color(c: Rgba) -> String {
    let [r, g, b, a] = c.0;
    let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {:.3})",
        to_byte(r),
        to_byte(g),
        to_byte(b),
        a.clamp(0.0, 1.0)
    )
}

pub fn font_spec(size_px: f32, style: FontStyle) -> String {
    let family = crate::constants::FONT_FAMILY;
    match style {
        FontStyle::Normal => format!("{}px {}", size_px, family),
        FontStyle::Italic => format!("italic {}px {}", size_px, family),
    }
}

pub fn text_baseline(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::CenterTop => "top",
        TextAnchor::Center => "middle",
    }
}

/// Replay a draw list. `scale` maps crowd (CSS pixel) coordinates onto the
/// device-pixel backing store.
pub fn paint(ctx: &web::CanvasRenderingContext2d, list: &DrawList, backing: (u32, u32), scale: f64) {
    _ = ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    ctx.set_line_cap(crate::constants::LINE_CAP);
    let (w, h) = (backing.0 as f64 / scale, backing.1 as f64 / scale);

    for p in list.items() {
        match p {
            Primitive::Clear(color) => {
                ctx.set_fill_style_str(&css_color(*color));
                ctx.fill_rect(0.0, 0.0, w, h);
            }
            Primitive::Line {
                from,
                to,
                width,
                color,
            } => {
                ctx.set_stroke_style_str(&css_color(*color));
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(from.x as f64, from.y as f64);
                ctx.line_to(to.x as f64, to.y as f64);
                ctx.stroke();
            }
            Primitive::Ellipse {
                center,
                diameter,
                width,
                color,
            } => {
                let r = (*diameter as f64 * 0.5).max(0.0);
                ctx.set_stroke_style_str(&css_color(*color));
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                _ = ctx.ellipse(center.x as f64, center.y as f64, r, r, 0.0, 0.0, TAU);
                ctx.stroke();
            }
            Primitive::Polygon {
                points,
                fill,
                stroke,
                width,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for pt in rest {
                    ctx.line_to(pt.x as f64, pt.y as f64);
                }
                ctx.close_path();
                ctx.set_fill_style_str(&css_color(*fill));
                ctx.fill();
                ctx.set_stroke_style_str(&css_color(*stroke));
                ctx.set_line_width(*width as f64);
                ctx.stroke();
            }
            Primitive::Text {
                text,
                at,
                size_px,
                style,
                anchor,
                color,
            } => {
                ctx.set_font(&font_spec(*size_px, *style));
                ctx.set_text_align("center");
                ctx.set_text_baseline(text_baseline(*anchor));
                ctx.set_fill_style_str(&css_color(*color));
                _ = ctx.fill_text(text, at.x as f64, at.y as f64);
            }
        }
    }
}
