//! NasBot application icon generator.
//!
//! Produces a procedural icon: a rounded robot head with two glowing cyan
//! eyes, a mouth grille and an antenna. Rendered at an arbitrary
//! resolution as RGBA pixel data suitable for use as a window icon.

/// Generate the NasBot icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let head_min = (s * 0.12, s * 0.26);
    let head_max = (s * 0.88, s * 0.92);
    let corner = s * 0.14;

    let eye_r = s * 0.095;
    let eye_y = s * 0.50;
    let eyes = [(s * 0.34, eye_y), (s * 0.66, eye_y)];

    let mouth_min = (s * 0.30, s * 0.70);
    let mouth_max = (s * 0.70, s * 0.80);

    let antenna_top = (s * 0.50, s * 0.08);
    let antenna_bottom = (s * 0.50, s * 0.26);
    let antenna_w = s * 0.03;
    let bulb_r = s * 0.06;

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Antenna stalk and bulb. ─────────────────────────
            let stalk = seg_dist(px, py, antenna_top, antenna_bottom);
            let stalk_aa = smooth_edge(stalk, antenna_w);
            let bulb = dist(px, py, antenna_top);
            let bulb_aa = smooth_edge(bulb, bulb_r);
            let antenna_aa = stalk_aa.max(bulb_aa);
            if antenna_aa > 0.0 {
                let (r, g, b) = if bulb_aa > stalk_aa {
                    (0xf3, 0x8b, 0xa8)
                } else {
                    (0x90, 0x94, 0xa0)
                };
                cr = lerp_c(cr, r, antenna_aa);
                cg = lerp_c(cg, g, antenna_aa);
                cb = lerp_c(cb, b, antenna_aa);
                ca = ca + (1.0 - ca) * antenna_aa;
            }

            // 2. Head. ───────────────────────────────────────────
            let head_d = rounded_rect_dist(px, py, head_min, head_max, corner);
            let head_aa = smooth_edge(head_d, 0.0);
            if head_aa > 0.0 {
                // Lighter toward the top.
                let grad = 1.0 - 0.25 * ((py - head_min.1) / (head_max.1 - head_min.1));
                let r = (0xc8 as f32 * grad) as u8;
                let g = (0xcc as f32 * grad) as u8;
                let b = (0xd6 as f32 * grad) as u8;
                cr = lerp_c(cr, r, head_aa);
                cg = lerp_c(cg, g, head_aa);
                cb = lerp_c(cb, b, head_aa);
                ca = ca + (1.0 - ca) * head_aa;
            }

            // 3. Eyes: dark socket with a cyan core. ─────────────
            for &eye in &eyes {
                let d = dist(px, py, eye);
                let socket = smooth_edge(d, eye_r) * head_aa;
                cr = lerp_c(cr, 0x10, socket);
                cg = lerp_c(cg, 0x10, socket);
                cb = lerp_c(cb, 0x14, socket);

                let core = smooth_edge(d, eye_r * 0.6) * head_aa;
                cr = lerp_c(cr, 0x00, core);
                cg = lerp_c(cg, 0xff, core);
                cb = lerp_c(cb, 0xff, core);
            }

            // 4. Mouth grille: alternating dark bars. ────────────
            if px > mouth_min.0 && px < mouth_max.0 && py > mouth_min.1 && py < mouth_max.1 {
                let bar = ((px - mouth_min.0) / (s * 0.05)) as u32 % 2 == 0;
                let shade = if bar { 0x20 } else { 0x48 };
                cr = lerp_c(cr, shade, head_aa);
                cg = lerp_c(cg, shade, head_aa);
                cb = lerp_c(cb, shade + 0x08, head_aa);
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

fn dist(px: f32, py: f32, c: (f32, f32)) -> f32 {
    ((px - c.0).powi(2) + (py - c.1).powi(2)).sqrt()
}

/// Distance from a point to a line segment.
fn seg_dist(px: f32, py: f32, a: (f32, f32), b: (f32, f32)) -> f32 {
    let abx = b.0 - a.0;
    let aby = b.1 - a.1;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return dist(px, py, a);
    }
    let t = (((px - a.0) * abx + (py - a.1) * aby) / len_sq).clamp(0.0, 1.0);
    dist(px, py, (a.0 + t * abx, a.1 + t * aby))
}

/// Signed distance to a rounded rectangle (negative inside).
fn rounded_rect_dist(px: f32, py: f32, min: (f32, f32), max: (f32, f32), r: f32) -> f32 {
    let cx = (min.0 + max.0) * 0.5;
    let cy = (min.1 + max.1) * 0.5;
    let hx = (max.0 - min.0) * 0.5 - r;
    let hy = (max.1 - min.1) * 0.5 - r;
    let qx = (px - cx).abs() - hx;
    let qy = (py - cy).abs() - hy;
    let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
    outside + qx.max(qy).min(0.0) - r
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
