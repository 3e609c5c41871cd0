use crate::constants::*;
use crate::core::{FieldFrame, ParticleField};
use crate::dom::set_style;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM mirror of a [`ParticleField`]: one element per decorative item, built
/// once at mount and restyled every frame.
pub struct FieldView {
    field: ParticleField,
    root: web::HtmlElement,
    nodes: Vec<web::HtmlElement>,
    connection_layer: web::Element,
    connections: Vec<web::Element>,
    orbitals: Vec<(web::HtmlElement, Vec<web::HtmlElement>)>,
    labels: Vec<web::HtmlElement>,
}

fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create div: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("not an HtmlElement: {:?}", e))?;
    el.set_class_name(class);
    _ = el.style().set_property("position", "absolute");
    Ok(el)
}

fn create_svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow::anyhow!("create svg {}: {:?}", tag, e))
}

fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append: {:?}", e))
}

impl FieldView {
    pub fn build(
        document: &web::Document,
        container: &web::Element,
        field: ParticleField,
    ) -> anyhow::Result<Self> {
        // Detached until the final append; a failed build leaves the container as it was.
        let root = create_div(document, FIELD_ROOT_CLASS)?;
        set_style(&root, "inset", "0");
        let svg = create_svg(document, "svg")?;
        _ = svg.set_attribute("width", "100%");
        _ = svg.set_attribute("height", "100%");
        _ = svg.set_attribute("style", "position:absolute;inset:0");
        append(&root, &svg)?;
        let mut connections = Vec::with_capacity(field.connections().len());
        for c in field.connections() {
            let line = create_svg(document, "line")?;
            _ = line.set_attribute("class", CONNECTION_CLASS);
            _ = line.set_attribute("x1", &format!("{:.2}%", c.p1.x));
            _ = line.set_attribute("y1", &format!("{:.2}%", c.p1.y));
            _ = line.set_attribute("x2", &format!("{:.2}%", c.p2.x));
            _ = line.set_attribute("y2", &format!("{:.2}%", c.p2.y));
            _ = line.set_attribute("stroke", CONNECTION_STROKE);
            _ = line.set_attribute("stroke-width", "1");
            _ = line.set_attribute("pathLength", "1");
            append(&svg, &line)?;
            connections.push(line);
        }

        let mut nodes = Vec::with_capacity(field.nodes().len());
        for n in field.nodes() {
            let el = create_div(document, NODE_CLASS)?;
            set_style(&el, "left", &format!("{:.2}%", n.position.x));
            set_style(&el, "top", &format!("{:.2}%", n.position.y));
            set_style(&el, "width", &format!("{:.1}px", n.size));
            set_style(&el, "height", &format!("{:.1}px", n.size));
            append(&root, &el)?;
            nodes.push(el);
        }

        let mut orbitals = Vec::with_capacity(field.orbitals().len());
        for o in field.orbitals() {
            let hub = create_div(document, "field-orbital")?;
            set_style(&hub, "left", &format!("{:.2}%", o.center.x));
            set_style(&hub, "top", &format!("{:.2}%", o.center.y));
            let mut satellites = Vec::with_capacity(o.satellites);
            for _ in 0..o.satellites {
                let sat = create_div(document, SATELLITE_CLASS)?;
                append(&hub, &sat)?;
                satellites.push(sat);
            }
            append(&root, &hub)?;
            orbitals.push((hub, satellites));
        }

        let mut labels = Vec::with_capacity(field.labels().len());
        for l in field.labels() {
            let el = create_div(document, LABEL_CLASS)?;
            el.set_text_content(Some(l.text));
            set_style(&el, "left", &format!("{:.2}%", l.position.x));
            set_style(&el, "top", &format!("{:.2}%", l.position.y));
            append(&root, &el)?;
            labels.push(el);
        }

        append(container, &root)?;

        log::info!(
            "[field] built nodes={} connections={} orbitals={} satellites={} labels={}",
            nodes.len(),
            connections.len(),
            orbitals.len(),
            field.satellite_count(),
            labels.len()
        );

        Ok(Self {
            field,
            root,
            nodes,
            connection_layer: svg,
            connections,
            orbitals,
            labels,
        })
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn apply(&self, frame: &FieldFrame) {
        for (el, n) in self.nodes.iter().zip(&frame.nodes) {
            set_style(
                el,
                "transform",
                &format!(
                    "translate({:.2}px, {:.2}px) scale({:.3})",
                    n.offset_px.x, n.offset_px.y, n.scale
                ),
            );
            set_style(el, "opacity", &format!("{:.3}", n.opacity));
        }

        _ = self.connection_layer.set_attribute(
            "style",
            &format!(
                "position:absolute;inset:0;transform:translate({:.2}px, {:.2}px)",
                frame.connection_offset_px.x, frame.connection_offset_px.y
            ),
        );
        for (el, c) in self.connections.iter().zip(&frame.connections) {
            _ = el.set_attribute("stroke-dasharray", &format!("{:.4} 1", c.progress));
        }

        for ((_, sats), o) in self.orbitals.iter().zip(&frame.orbitals) {
            for (el, p) in sats.iter().zip(&o.satellites_px) {
                set_style(
                    el,
                    "transform",
                    &format!("translate({:.2}px, {:.2}px)", p.x, p.y),
                );
            }
        }

        for (el, l) in self.labels.iter().zip(&frame.labels) {
            set_style(
                el,
                "transform",
                &format!("translate({:.2}px, {:.2}px)", l.offset_px.x, l.offset_px.y),
            );
            set_style(el, "opacity", &format!("{:.3}", l.opacity));
        }
    }

    /// Detach every generated element from the container.
    pub fn remove(&self) {
        self.root.remove();
    }
}

impl Drop for FieldView {
    fn drop(&mut self) {
        self.remove();
    }
}
