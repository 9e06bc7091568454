//! JS-compatibility code, for driving a simulation from a browser. The
//! JS side owns the canvas, the input events and the step timer; everything
//! else goes through [HexLife].
//!
//! Don't enable this feature when using the crate from Rust. Build it with
//! `wasm-pack` instead, then import the generated package from JS/TS.

mod util;

use crate::{
    grid::region::DEFAULT_PADDING,
    js::util::ResultExt,
    util::unit::{Point2, Vector2},
    Brush, CubePoint, Grid, Layout, LifeConfig, RegionSize,
};
use log::info;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Executed when the Wasm module is first loaded
#[wasm_bindgen(start)]
pub fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    wasm_logger::init(wasm_logger::Config::default());
}

/// Validate the given config and return it as a strictly typed JS object.
/// Any missing values are populated with defaults. Fails if the value can't
/// be deserialized, or has any invalid values.
#[wasm_bindgen]
pub fn validate_config(input: JsValue) -> Result<LifeConfigObject, JsValue> {
    util::validate_config::<LifeConfig, LifeConfigObject>(input)
}

/// Shape of each cell handed to the renderer
#[derive(Serialize)]
struct CellView {
    q: i32,
    r: i32,
    s: i32,
    alive: bool,
    corners: [Point2; 6],
}

/// A running simulation: the grid, the layout used to draw it, and the
/// state of the current paint stroke.
#[wasm_bindgen]
pub struct HexLife {
    grid: Grid,
    layout: Layout,
    brush: Brush,
    /// Where the plane origin sits on the canvas
    canvas_origin: Point2,
}

#[wasm_bindgen]
impl HexLife {
    /// Create a new simulation with an empty grid. The config is given as a
    /// JS object; it gets deserialized and validated, and either of those
    /// can fail.
    #[wasm_bindgen(constructor)]
    pub fn new(config: LifeConfigObject) -> Result<HexLife, JsValue> {
        let config: LifeConfig = JsValue::into_serde(&config).into_js()?;
        let grid = Grid::from_config(&config).map_err(|err| {
            // Include the whole error chain, not just the context
            util::to_js_error(format!("{:#}", err))
        })?;
        Ok(Self {
            grid,
            layout: Layout::from_config(&config.layout),
            brush: Brush::default(),
            canvas_origin: Point2::ORIGIN,
        })
    }

    /// Size the grid to fill a canvas of the given size, keeping the state
    /// of any cells that still fit. The grid is centered on the canvas.
    pub fn fit_viewport(&mut self, width: f64, height: f64) {
        self.canvas_origin = Point2::new(width / 2.0, height / 2.0);
        let region = RegionSize::fit_viewport(
            Vector2::new(width, height),
            DEFAULT_PADDING,
            self.layout.size(),
        );
        info!("Fitting {}x{} viewport with {} region", width, height, region);
        self.grid.resize(region);
    }

    /// Fill the grid with random cells and start over at generation 1
    pub fn randomize(&mut self) {
        self.grid.randomize(self.grid.region());
    }

    /// Kill every cell and start over at generation 1
    pub fn reset(&mut self) {
        self.grid.reset(self.grid.region());
    }

    /// Advance one generation. Returns `false` once the grid has stopped
    /// changing, which is the driver's cue to stop its timer.
    pub fn step(&mut self) -> bool {
        self.grid.step();
        self.grid.has_changed()
    }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> f64 {
        self.grid.generation() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u16 {
        self.grid.region().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u16 {
        self.grid.region().height
    }

    /// Start a paint stroke at a point on the canvas. Returns whether any
    /// cell changed, i.e. whether a redraw is needed.
    pub fn begin_stroke(&mut self, x: f64, y: f64) -> bool {
        let position = self.canvas_to_hex(x, y);
        self.brush.begin(&mut self.grid, position)
    }

    pub fn continue_stroke(&mut self, x: f64, y: f64) -> bool {
        let position = self.canvas_to_hex(x, y);
        self.brush.apply(&mut self.grid, position)
    }

    /// Paint the final point of a stroke, then end it
    pub fn end_stroke(&mut self, x: f64, y: f64) -> bool {
        let changed = self.continue_stroke(x, y);
        self.brush.end();
        changed
    }

    /// Change the size of every cell. Call [Self::fit_viewport] afterwards to
    /// fit the grid to the new size.
    pub fn set_cell_size(&mut self, size: f64) {
        self.layout.set_size(Vector2::uniform(size));
    }

    // Each rule setter returns the value that was actually stored, which can
    // differ from the input so the UI needs to reflect it back

    pub fn set_min_alive(&mut self, value: u8) -> u8 {
        self.grid.rules_mut().set_min_alive(value)
    }

    pub fn set_max_alive(&mut self, value: u8) -> u8 {
        self.grid.rules_mut().set_max_alive(value)
    }

    pub fn set_min_birth(&mut self, value: u8) -> u8 {
        self.grid.rules_mut().set_min_birth(value)
    }

    pub fn set_max_birth(&mut self, value: u8) -> u8 {
        self.grid.rules_mut().set_max_birth(value)
    }

    /// Get every cell along with its hexagon's corners in canvas space,
    /// ready to draw. Start each path at corner 5.
    pub fn cells(&self) -> Result<HexCellArray, JsValue> {
        let offset = self.canvas_origin - Point2::ORIGIN;
        let cells: Vec<CellView> = self
            .grid
            .cells()
            .map(|cell| {
                let position = cell.position();
                CellView {
                    q: position.q(),
                    r: position.r(),
                    s: position.s(),
                    alive: cell.alive,
                    corners: self
                        .layout
                        .polygon_corners(position)
                        .map(|corner| corner + offset),
                }
            })
            .collect();
        util::to_js_typed(&cells)
    }
}

impl HexLife {
    fn canvas_to_hex(&self, x: f64, y: f64) -> CubePoint {
        self.layout
            .screen_to_hex(Point2::new(x, y), self.canvas_origin)
    }
}

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"
/**
 * See description in the `extern "C"` section below
 */
export interface LifeConfigObject {
    seed: string | number;
    width: number;
    height: number;
    rules: {
        min_alive: number;
        max_alive: number;
        min_birth: number;
        max_birth: number;
    };
    layout: {
        orientation: 'pointy' | 'flat';
        cell_size: number;
    };
}

export interface HexCell {
    q: number;
    r: number;
    s: number;
    alive: boolean;
    corners: { x: number; y: number }[];
}
"#;

#[wasm_bindgen]
extern "C" {
    /// A TS version of [LifeConfig]. This represents what **can be
    /// deserialized into a [LifeConfig]**, and has to be kept in sync with it
    /// by hand.
    #[wasm_bindgen(typescript_type = "LifeConfigObject")]
    pub type LifeConfigObject;

    /// Type hack needed until
    /// https://github.com/rustwasm/wasm-bindgen/issues/111
    #[wasm_bindgen(typescript_type = "HexCell[]")]
    pub type HexCellArray;
}
