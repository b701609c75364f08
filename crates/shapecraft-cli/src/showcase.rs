// Imports
use anyhow::Context;
use serde::Serialize;
use shapecraft_compose::area::AreaStrategyType;
use shapecraft_compose::builders::ShapeFactoryType;
use shapecraft_compose::decorators::{BorderDecorator, ColorDecorator};
use shapecraft_compose::{AreaCalculator, DrawContext, Shape, ShapeKind, Shapeable};
use tracing::info;

/// Options for the showcase run.
#[derive(Debug, Clone)]
pub(crate) struct ShowcaseOptions {
    pub(crate) rectangle_color: String,
    pub(crate) circle_color: String,
    /// Overrides the strategy otherwise picked by the kind of the shape.
    pub(crate) rectangle_strategy: Option<AreaStrategyType>,
    /// Overrides the strategy otherwise picked by the kind of the shape.
    pub(crate) circle_strategy: Option<AreaStrategyType>,
}

impl Default for ShowcaseOptions {
    fn default() -> Self {
        Self {
            rectangle_color: String::from("Azul"),
            circle_color: String::from("Vermelho"),
            rectangle_strategy: None,
            circle_strategy: None,
        }
    }
}

/// A single area calculation.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct AreaRecord {
    pub(crate) shape: ShapeKind,
    pub(crate) strategy: ShapeKind,
    pub(crate) area: f64,
}

/// What the showcase created and calculated.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Showcase {
    pub(crate) shapes: Vec<Shape>,
    pub(crate) areas: Vec<AreaRecord>,
}

/// Creates a rectangle and a circle through their factories, decorates them with a color and a
/// border, draws both and then calculates their areas.
///
/// Every step is drawn onto `cx`. Fails as soon as an area strategy rejects a shape.
pub(crate) fn run_showcase(
    cx: &mut dyn DrawContext,
    options: &ShowcaseOptions,
) -> anyhow::Result<Showcase> {
    let rectangle = ShapeFactoryType::Rectangle.factory().create_shape();
    let circle = ShapeFactoryType::Circle.factory().create_shape();
    let shapes = vec![rectangle, circle];

    let decorated_rectangle = BorderDecorator::new(ColorDecorator::new(
        rectangle,
        options.rectangle_color.as_str(),
    ));
    decorated_rectangle.draw(cx);

    let decorated_circle =
        BorderDecorator::new(ColorDecorator::new(circle, options.circle_color.as_str()));
    decorated_circle.draw(cx);

    let mut calculator = AreaCalculator::default();
    let mut areas = Vec::with_capacity(2);

    for (shape, strategy_type) in [
        (&decorated_rectangle, options.rectangle_strategy),
        (&decorated_circle, options.circle_strategy),
    ] {
        let strategy = strategy_type
            .unwrap_or_else(|| AreaStrategyType::for_kind(shape.kind()))
            .strategy();
        let strategy_kind = strategy.supported_kind();
        calculator.set_boxed_strategy(strategy);

        let area = calculator.calculate_area(shape).with_context(|| {
            format!(
                "Calculating the area of the {} with the {strategy_kind} strategy failed",
                shape.kind()
            )
        })?;
        cx.draw_line(&area_line(shape.kind(), area));

        areas.push(AreaRecord {
            shape: shape.kind(),
            strategy: strategy_kind,
            area,
        });
    }

    info!("Showcase finished, {} areas calculated", areas.len());
    Ok(Showcase { shapes, areas })
}

fn area_line(kind: ShapeKind, area: f64) -> String {
    match kind {
        ShapeKind::Rectangle => format!("Rectangle area: {area:?}"),
        ShapeKind::Circle => format!("Circle area: {area:?}"),
    }
}
