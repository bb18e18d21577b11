use std::io;

use archview_core::{Clustering, Component, Link, Options, World};
use archview_dot::{Dot, render, render_to_string};
use pretty_assertions::assert_eq;

fn lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Node and edge declarations, skipping the `node`/`edge` default directives.
fn declarations(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|line| line.contains(" ["))
        .filter(|line| !line.starts_with("\tnode [") && !line.starts_with("\tedge ["))
        .collect()
}

fn site_world() -> World {
    World::new(vec![
        Component::new("example/site/pgdb.DB")
            .with_class("Database")
            .with_comment("DB implements postgres implementation of the master database.")
            .with_link(Link::implements("example/site/user.Repo", "DB.Users"))
            .with_link(Link::implements("example/site/comment.Repo", "DB.Comments")),
        Component::new("example/site/user.Repo")
            .with_class("Repository")
            .with_comment("Repo stores users."),
        Component::new("example/site/server.Server")
            .with_class("Service")
            .with_link(Link::uses("example/site/user.Repo", "Server.users")),
    ])
}

/// Accepts `limit` bytes, then fails every write.
struct LimitedSink {
    data: Vec<u8>,
    limit: usize,
}

impl LimitedSink {
    fn new(limit: usize) -> Self {
        Self {
            data: Vec::new(),
            limit,
        }
    }
}

impl io::Write for LimitedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit - self.data.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "sink full"));
        }
        let n = room.min(buf.len());
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Interrupts every other write.
struct FlakySink {
    data: Vec<u8>,
    interrupt: bool,
}

impl io::Write for FlakySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
        }
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn flat_colored_output() {
    let options = Options::new().with_trim_prefix("example/site/");
    let output = render_to_string(&site_world(), &options);

    let expected = lines(&[
        "digraph G {",
        "\trankdir=LR;",
        "\tranksep=3;",
        "\tnode [penwidth=2 width=3 shape=record target=\"_graphviz\" style=filled fillcolor=white];",
        "\tedge [penwidth=2];",
        "",
        "\texample_site_pgdb_DB [label=\"pgdb.DB\",href=\"http://godoc.org/example/site/pgdb#DB\",color=\"#890791b2\"];",
        "\texample_site_user_Repo [label=\"user.Repo\",href=\"http://godoc.org/example/site/user#Repo\",color=\"#915007b2\"];",
        "\texample_site_server_Server [label=\"server.Server\",href=\"http://godoc.org/example/site/server#Server\",color=\"#7c0791b2\"];",
        "",
        "\texample_site_pgdb_DB -> example_site_user_Repo [color=\"#915007b2\",tooltip=\"DB.Users\",style=dashed];",
        "\texample_site_pgdb_DB -> example_site_comment_Repo [color=\"#0c9107b2\",tooltip=\"DB.Comments\",style=dashed];",
        "",
        "\texample_site_server_Server -> example_site_user_Repo [color=\"#915007b2\",tooltip=\"Server.users\"];",
        "",
        "}",
    ]);
    assert_eq!(output, expected);
}

#[test]
fn clustered_uncolored_output() {
    let options = Options::new()
        .with_no_color(true)
        .with_clustering(Clustering::ByClass);
    let output = render_to_string(&site_world(), &options);

    let expected = lines(&[
        "digraph G {",
        "\trankdir=LR;",
        "\tranksep=3;",
        "\tnode [width=3 shape=record target=\"_graphviz\"];",
        "\tedge [];",
        "",
        "\tsubgraph cluster_Database {",
        "\t\tlabel=\"Database\";",
        "",
        "\t\tbgcolor=gray98; pencolor=gray80; fontsize=10;",
        "",
        "\t\texample_site_pgdb_DB [label=\"example/site/pgdb.DB\",tooltip=\"DB implements postgres implementation of the master database.\"];",
        "\t}",
        "\tsubgraph cluster_Repository {",
        "\t\tlabel=\"Repository\";",
        "",
        "\t\tbgcolor=gray98; pencolor=gray80; fontsize=10;",
        "",
        "\t\texample_site_user_Repo [label=\"example/site/user.Repo\",tooltip=\"Repo stores users.\"];",
        "\t}",
        "\tsubgraph cluster_Service {",
        "\t\tlabel=\"Service\";",
        "",
        "\t\tbgcolor=gray98; pencolor=gray80; fontsize=10;",
        "",
        "\t\texample_site_server_Server [label=\"example/site/server.Server\",tooltip=\"\"];",
        "\t}",
        "",
        "\texample_site_pgdb_DB -> example_site_user_Repo [tooltip=\"DB.Users\",style=dashed];",
        "\texample_site_pgdb_DB -> example_site_comment_Repo [tooltip=\"DB.Comments\",style=dashed];",
        "",
        "\texample_site_server_Server -> example_site_user_Repo [tooltip=\"Server.users\"];",
        "",
        "}",
    ]);
    assert_eq!(output, expected);
}

#[test]
fn empty_world_is_a_closed_wrapper() {
    let output = render_to_string(&World::default(), &Options::default());
    let expected = lines(&[
        "digraph G {",
        "\trankdir=LR;",
        "\tranksep=3;",
        "\tnode [penwidth=2 width=3 shape=record target=\"_graphviz\" style=filled fillcolor=white];",
        "\tedge [penwidth=2];",
        "",
        "",
        "}",
    ]);
    assert_eq!(output, expected);

    let clustered = render_to_string(
        &World::default(),
        &Options::new().with_clustering(Clustering::ByClass),
    );
    assert_eq!(clustered, expected);
    assert!(!output.contains("->"));
    assert!(!output.contains("subgraph"));
}

#[test]
fn single_component_cluster() {
    let world = World::new(vec![
        Component::new("pkg.Foo")
            .with_class("Service")
            .with_comment("does X"),
    ]);
    let options = Options::new().with_clustering(Clustering::ByClass);
    let output = render_to_string(&world, &options);

    assert_eq!(output.matches("subgraph cluster_").count(), 1);
    assert!(output.contains("\tsubgraph cluster_Service {\n\t\tlabel=\"Service\";\n"));
    assert!(output.contains(
        "\t\tpkg_Foo [label=\"pkg.Foo\",color=\"#560791b2\",tooltip=\"does X\"];\n"
    ));
    assert!(!output.contains("href="));

    let trimmed = render_to_string(&world, &options.clone().with_trim_prefix("pkg."));
    assert!(trimmed.contains("\t\tpkg_Foo [label=\"Foo\","));
}

#[test]
fn flat_nodes_have_href_but_no_tooltip() {
    let world = World::new(vec![
        Component::new("pkg.Foo")
            .with_class("Service")
            .with_comment("does X"),
    ]);
    let output = render_to_string(&world, &Options::default());
    assert!(output.contains("\tpkg_Foo [label=\"pkg.Foo\",href=\"http://godoc.org/pkg#Foo\",color=\"#560791b2\"];\n"));
    assert!(!output.contains("tooltip="));
}

#[test]
fn implementation_links_are_dashed() {
    let world = |implementation: bool| {
        World::new(vec![
            Component::new("A").with_link(Link {
                target: "B".to_string(),
                path: "uses".to_string(),
                implementation,
            }),
            Component::new("B"),
        ])
    };

    let dashed = render_to_string(&world(true), &Options::default());
    assert!(dashed.contains("\tA -> B [color=\"#910770b2\",tooltip=\"uses\",style=dashed];\n"));

    let plain = render_to_string(&world(false), &Options::default());
    assert!(plain.contains("\tA -> B [color=\"#910770b2\",tooltip=\"uses\"];\n"));
    let edges: Vec<&str> = declarations(&plain)
        .into_iter()
        .filter(|line| line.contains("->"))
        .collect();
    assert_eq!(edges, vec!["\tA -> B [color=\"#910770b2\",tooltip=\"uses\"];"]);
    assert!(declarations(&plain).iter().all(|line| !line.contains("style=")));
    // The colored node default still asks for filled nodes.
    assert!(plain.contains("style=filled fillcolor=white"));
}

#[test]
fn no_color_removes_every_color_attribute() {
    for clustering in [Clustering::None, Clustering::ByClass] {
        let options = Options::new()
            .with_no_color(true)
            .with_clustering(clustering);
        let output = render_to_string(&site_world(), &options);
        let declared = declarations(&output);
        assert_eq!(declared.len(), 6, "{output}");
        for line in declared {
            assert!(!line.contains("color="), "{line}");
        }
        assert!(!output.contains("style=filled"), "{output}");
        assert!(output.contains("\tnode [width=3 shape=record target=\"_graphviz\"];\n"));
    }
}

#[test]
fn colors_follow_the_name_across_nodes_and_edges() {
    let output = render_to_string(&site_world(), &Options::default());
    // user.Repo is a node and the target of two edges.
    assert_eq!(output.matches("color=\"#915007b2\"").count(), 3);
}

#[test]
fn rendering_is_repeatable() {
    let world = site_world();
    for options in [
        Options::default(),
        Options::new().with_clustering(Clustering::ByClass),
        Options::new().with_no_color(true).with_trim_prefix("example/"),
    ] {
        assert_eq!(
            render_to_string(&world, &options),
            render_to_string(&world, &options)
        );
    }
}

#[test]
fn clusters_keep_first_seen_order() {
    let world = World::new(vec![
        Component::new("z.Server").with_class("Service"),
        Component::new("a.DB").with_class("Database"),
        Component::new("m.Mailer").with_class("Service"),
    ]);
    let output = render_to_string(&world, &Options::new().with_clustering(Clustering::ByClass));

    let service = output.find("cluster_Service").unwrap();
    let database = output.find("cluster_Database").unwrap();
    assert!(service < database);

    let server = output.find("\t\tz_Server ").unwrap();
    let mailer = output.find("\t\tm_Mailer ").unwrap();
    assert!(server < mailer && mailer < database);
}

#[test]
fn quotes_in_text_are_escaped() {
    let world = World::new(vec![
        Component::new("a.Quoted")
            .with_class("Say \"hi\"")
            .with_comment("uses \"raw\" input")
            .with_link(Link::uses("a.Other", "path\\with\"quote")),
    ]);
    let output = render_to_string(
        &world,
        &Options::new()
            .with_clustering(Clustering::ByClass)
            .with_no_color(true),
    );
    assert!(output.contains("\tsubgraph cluster_Say__hi_ {\n"));
    assert!(output.contains("\t\tlabel=\"Say \\\"hi\\\"\";\n"));
    assert!(output.contains("tooltip=\"uses \\\"raw\\\" input\""));
    assert!(output.contains("\ta_Quoted -> a_Other [tooltip=\"path\\\\with\\\"quote\"];\n"));
}

#[test]
fn sanitized_names_may_collide() {
    // Distinct names differing only in separators share one node id.
    let world = World::new(vec![Component::new("a.b"), Component::new("a_b")]);
    let output = render_to_string(&world, &Options::new().with_no_color(true));
    assert_eq!(output.matches("\ta_b [label=").count(), 2);
}

#[test]
fn render_reports_bytes_written() {
    let world = site_world();
    let options = Options::default();
    let mut sink = Vec::new();
    let written = render(&world, &options, &mut sink).unwrap();
    assert_eq!(written, sink.len() as u64);
    assert_eq!(sink, render_to_string(&world, &options).into_bytes());
}

#[test]
fn write_failure_stops_output() {
    let world = site_world();
    let options = Options::default();
    let full = render_to_string(&world, &options);

    let mut sink = LimitedSink::new(40);
    let err = Dot::new(&world, &options).write_to(&mut sink).unwrap_err();
    assert_eq!(err.written(), 40);
    assert_eq!(err.error().kind(), io::ErrorKind::StorageFull);
    assert_eq!(sink.data, full.as_bytes()[..40].to_vec());

    // Failing on the very last byte leaves the footer unwritten.
    let mut sink = LimitedSink::new(full.len() - 1);
    let err = render(&world, &options, &mut sink).unwrap_err();
    assert_eq!(err.written(), full.len() as u64 - 1);
    assert!(!String::from_utf8_lossy(&sink.data).ends_with("}\n"));
    let io_err = err.into_error();
    assert_eq!(io_err.to_string(), "sink full");

    // Exactly enough room succeeds.
    let mut sink = LimitedSink::new(full.len());
    assert_eq!(
        render(&world, &options, &mut sink).unwrap(),
        full.len() as u64
    );
}

#[test]
fn interrupted_writes_are_retried() {
    let world = site_world();
    let options = Options::default();
    let mut sink = FlakySink {
        data: Vec::new(),
        interrupt: false,
    };
    let written = render(&world, &options, &mut sink).unwrap();
    assert_eq!(written, sink.data.len() as u64);
    assert_eq!(sink.data, render_to_string(&world, &options).into_bytes());
}
