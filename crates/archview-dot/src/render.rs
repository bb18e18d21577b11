//! Single-pass DOT emission.

use std::io;

use archview_core::{Clustering, Component};

use crate::Dot;
use crate::cluster::group_by_class;
use crate::dot::{DotWriter, attrs, quote, sanitize_id};

/// Emit the whole graph. Stops writing at the first sink failure.
pub(crate) fn write_graph<W: io::Write + ?Sized>(dot: &Dot<'_>, out: &mut DotWriter<'_, W>) {
    write_header(dot, out);

    match dot.options.clustering {
        Clustering::ByClass => write_clusters(dot, out),
        Clustering::None => write_flat_nodes(dot, out),
    }

    writeln!(out);
    write_edges(dot, out);

    writeln!(out, "}}");
}

fn write_header<W: io::Write + ?Sized>(dot: &Dot<'_>, out: &mut DotWriter<'_, W>) {
    writeln!(out, "digraph G {{");
    writeln!(out, "\trankdir=LR;");
    writeln!(out, "\tranksep=3;");

    if dot.options.no_color {
        writeln!(out, "\tnode [width=3 shape=record target=\"_graphviz\"];");
        writeln!(out, "\tedge [];");
    } else {
        writeln!(
            out,
            "\tnode [penwidth=2 width=3 shape=record target=\"_graphviz\" style=filled fillcolor=white];"
        );
        writeln!(out, "\tedge [penwidth=2];");
    }

    writeln!(out);
}

fn write_flat_nodes<W: io::Write + ?Sized>(dot: &Dot<'_>, out: &mut DotWriter<'_, W>) {
    for component in &dot.world.components {
        if !out.is_ok() {
            return;
        }
        let list = attrs(&[
            dot.label(component),
            dot.href(component),
            dot.color(&component.name),
        ]);
        writeln!(out, "\t{} {};", dot.id(&component.name), list);
    }
}

fn write_clusters<W: io::Write + ?Sized>(dot: &Dot<'_>, out: &mut DotWriter<'_, W>) {
    for cluster in group_by_class(&dot.world.components) {
        if !out.is_ok() {
            return;
        }
        writeln!(out, "\tsubgraph cluster_{} {{", sanitize_id(cluster.class));
        writeln!(out, "\t\tlabel={};\n", quote(cluster.class));
        writeln!(out, "\t\tbgcolor=gray98; pencolor=gray80; fontsize=10;\n");
        for component in cluster.components {
            write_cluster_node(dot, out, component);
        }
        writeln!(out, "\t}}");
    }
}

/// Cluster members carry a tooltip but no href.
fn write_cluster_node<W: io::Write + ?Sized>(
    dot: &Dot<'_>,
    out: &mut DotWriter<'_, W>,
    component: &Component,
) {
    let list = attrs(&[
        dot.label(component),
        dot.color(&component.name),
        dot.node_tooltip(component),
    ]);
    writeln!(out, "\t\t{} {};", dot.id(&component.name), list);
}

fn write_edges<W: io::Write + ?Sized>(dot: &Dot<'_>, out: &mut DotWriter<'_, W>) {
    for source in &dot.world.components {
        if !out.is_ok() {
            return;
        }
        let source_id = dot.id(&source.name);
        for link in &source.links {
            let list = attrs(&[
                dot.color(&link.target),
                dot.edge_tooltip(link),
                dot.link_style(link),
            ]);
            writeln!(out, "\t{} -> {} {};", source_id, dot.id(&link.target), list);
        }
        if !source.links.is_empty() {
            writeln!(out);
        }
    }
}
