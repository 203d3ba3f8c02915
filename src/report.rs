use std::io::Write;

use matrix_sssp::{Route, ShortestPaths, VertexId};

fn format_path(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|v| format!("v{}", v))
        .collect::<Vec<_>>()
        .join("-")
}

pub fn format_line(vertex: VertexId, route: Option<&Route>) -> String {
    match route {
        Some(route) => format!(
            "to v{}: cost = {}, path: {}",
            vertex,
            route.cost(),
            format_path(route.vertices())
        ),
        None => format!("to v{}: no path", vertex),
    }
}

/// One line per target, skipping the source. `only` restricts the report to a single vertex.
pub fn write_text<W: Write>(
    out: &mut W,
    paths: &ShortestPaths,
    only: Option<VertexId>,
) -> anyhow::Result<()> {
    writeln!(out, "Dijkstra results from v{}:", paths.source())?;
    for vertex in 1..=paths.vertex_count() {
        if only.map(|o| o != vertex).unwrap_or(vertex == paths.source()) {
            continue;
        }
        let route = paths.route_to(vertex)?;
        writeln!(out, "{}", format_line(vertex, route.as_ref()))?;
    }
    Ok(())
}

/// Writes `vertex,distance,path` rows, closest first. `only` restricts the rows to a single vertex.
pub fn write_csv<W: Write>(
    out: W,
    paths: &ShortestPaths,
    only: Option<VertexId>,
    include_unreachable: bool,
) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["vertex", "distance", "path"])?;

    let mut rows: Vec<(VertexId, f64)> = paths
        .distances()
        .iter()
        .enumerate()
        .map(|(i, &d)| (i + 1, d))
        .filter(|&(vertex, _)| only.map(|o| o == vertex).unwrap_or(true))
        .collect();
    rows.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut written = 0;
    for (vertex, d) in rows {
        if !d.is_finite() && !include_unreachable {
            continue;
        }
        let (distance, path) = match paths.route_to(vertex)? {
            Some(route) => (format!("{}", route.cost()), format_path(route.vertices())),
            None => (String::from("inf"), String::new()),
        };
        wtr.write_record(&[vertex.to_string(), distance, path])?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_sssp::{Graph, ShortestPathEngine};

    fn paths() -> ShortestPaths {
        let graph = Graph::from_edges(3, &[(1, 2, 10.0), (2, 1, 1.0)]).unwrap();
        ShortestPathEngine::new(&graph).run_from(1).unwrap()
    }

    #[test]
    fn text_report() {
        let mut out = Vec::new();
        write_text(&mut out, &paths(), None).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Dijkstra results from v1:\nto v2: cost = 10, path: v1-v2\nto v3: no path\n"
        );
    }

    #[test]
    fn text_report_single_destination() {
        let mut out = Vec::new();
        write_text(&mut out, &paths(), Some(3)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Dijkstra results from v1:\nto v3: no path\n"
        );
    }

    #[test]
    fn csv_report() {
        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &paths(), None, false).unwrap(), 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "vertex,distance,path\n1,0,v1\n2,10,v1-v2\n"
        );

        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &paths(), None, true).unwrap(), 3);
        assert!(String::from_utf8(out).unwrap().ends_with("3,inf,\n"));
    }

    #[test]
    fn csv_report_single_destination() {
        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &paths(), Some(2), false).unwrap(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "vertex,distance,path\n2,10,v1-v2\n"
        );

        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &paths(), Some(3), false).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), "vertex,distance,path\n");

        let mut out = Vec::new();
        assert_eq!(write_csv(&mut out, &paths(), Some(3), true).unwrap(), 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "vertex,distance,path\n3,inf,\n"
        );
    }
}
