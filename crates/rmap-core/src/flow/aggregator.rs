//! Stage transition aggregation.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use super::model::{FlowGraph, FlowLink, FlowNode};
use crate::application::{Application, channel_or_unknown};

type TransitionCounts<'a> = BTreeMap<&'a str, BTreeMap<(&'a str, &'a str), usize>>;

/// Builds the flow graph for a set of applications.
///
/// Each application's stages are ordered by date (on a copy) and every
/// consecutive pair is counted under the application's channel. Stage names
/// are compared exactly, so `"Interview"` and `"interview"` are separate
/// nodes.
pub fn transform(applications: &[Application]) -> FlowGraph {
    let sorted: Vec<(&Application, Vec<String>)> = applications
        .iter()
        .map(|app| {
            let names = app
                .sorted_stages()
                .into_iter()
                .map(|stage| stage.name)
                .collect();
            (app, names)
        })
        .collect();

    let mut occupancy: BTreeMap<&str, usize> = BTreeMap::new();
    let mut transitions: TransitionCounts<'_> = BTreeMap::new();

    for (app, names) in &sorted {
        let visited: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        for name in visited {
            *occupancy.entry(name).or_insert(0) += 1;
        }

        let channel = channel_or_unknown(&app.channel);
        for pair in names.windows(2) {
            *transitions
                .entry(channel)
                .or_default()
                .entry((pair[0].as_str(), pair[1].as_str()))
                .or_insert(0) += 1;
        }
    }

    let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(occupancy.len());
    let nodes: Vec<FlowNode> = occupancy
        .iter()
        .enumerate()
        .map(|(index, (name, count))| {
            index_of.insert(*name, index);
            FlowNode {
                stage_name: name.to_string(),
                occupancy_count: *count,
            }
        })
        .collect();

    let mut links = Vec::new();
    for (channel, pairs) in &transitions {
        for ((from, to), count) in pairs {
            if let (Some(&source_index), Some(&target_index)) =
                (index_of.get(from), index_of.get(to))
            {
                links.push(FlowLink {
                    source_index,
                    target_index,
                    weight: *count,
                    channel: channel.to_string(),
                });
            }
        }
    }

    debug!(
        "Flow graph built from {} applications: {} nodes, {} links",
        applications.len(),
        nodes.len(),
        links.len()
    );

    FlowGraph { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Stage;

    fn app(id: &str, channel: &str, stages: &[(&str, &str)]) -> Application {
        let mut app = Application::new(id, "Acme", channel, "Engineer", "2024-01-01");
        app.stages = stages
            .iter()
            .map(|(name, date)| Stage::new(*name, *date, None))
            .collect();
        app
    }

    fn link_names(graph: &FlowGraph, link: &FlowLink) -> (String, String) {
        (
            graph.nodes[link.source_index].stage_name.clone(),
            graph.nodes[link.target_index].stage_name.clone(),
        )
    }

    #[test]
    fn test_two_channels_keep_separate_links() {
        let apps = vec![
            app(
                "a",
                "LinkedIn",
                &[
                    ("Applied", "2024-01-01"),
                    ("Interview", "2024-01-10"),
                    ("Offer", "2024-01-20"),
                ],
            ),
            app(
                "b",
                "Referral",
                &[
                    ("Applied", "2024-02-01"),
                    ("Interview", "2024-02-15"),
                    ("Rejected", "2024-02-20"),
                ],
            ),
        ];

        let graph = transform(&apps);

        let nodes: Vec<(&str, usize)> = graph
            .nodes
            .iter()
            .map(|n| (n.stage_name.as_str(), n.occupancy_count))
            .collect();
        assert_eq!(
            nodes,
            vec![("Applied", 2), ("Interview", 2), ("Offer", 1), ("Rejected", 1)]
        );

        let links: Vec<(String, String, usize, String)> = graph
            .links
            .iter()
            .map(|l| {
                let (from, to) = link_names(&graph, l);
                (from, to, l.weight, l.channel.clone())
            })
            .collect();
        assert_eq!(links.len(), 4);
        assert!(links.contains(&("Applied".into(), "Interview".into(), 1, "LinkedIn".into())));
        assert!(links.contains(&("Applied".into(), "Interview".into(), 1, "Referral".into())));
        assert!(links.contains(&("Interview".into(), "Offer".into(), 1, "LinkedIn".into())));
        assert!(links.contains(&("Interview".into(), "Rejected".into(), 1, "Referral".into())));
        assert!(graph.is_renderable());
    }

    #[test]
    fn test_same_channel_transitions_are_summed() {
        let stages = [("Applied", "2024-01-01"), ("Rejected", "2024-01-05")];
        let apps = vec![app("a", "Glassdoor", &stages), app("b", "Glassdoor", &stages)];

        let graph = transform(&apps);
        assert_eq!(graph.links.len(), 1);
        assert_eq!(graph.links[0].weight, 2);
        assert_eq!(graph.total_transitions(), 2);
    }

    #[test]
    fn test_single_stage_counts_node_without_links() {
        let apps = vec![app("a", "LinkedIn", &[("Applied", "2024-01-01")])];

        let graph = transform(&apps);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].occupancy_count, 1);
        assert!(graph.links.is_empty());
        assert!(!graph.is_renderable());
    }

    #[test]
    fn test_zero_stages_contribute_nothing() {
        let graph = transform(&[app("a", "LinkedIn", &[])]);
        assert_eq!(graph, FlowGraph::default());
    }

    #[test]
    fn test_stages_are_ordered_by_date_before_pairing() {
        let apps = vec![app(
            "a",
            "LinkedIn",
            &[("Offer", "2024-03-01"), ("Applied", "2024-01-01")],
        )];

        let graph = transform(&apps);
        assert_eq!(graph.links.len(), 1);
        assert_eq!(
            link_names(&graph, &graph.links[0]),
            ("Applied".to_string(), "Offer".to_string())
        );
        // Source data is untouched.
        assert_eq!(apps[0].stages[0].name, "Offer");
    }

    #[test]
    fn test_repeated_stage_counts_once_per_application() {
        let apps = vec![app(
            "a",
            "LinkedIn",
            &[
                ("Applied", "2024-01-01"),
                ("Interview", "2024-01-05"),
                ("Interview", "2024-01-10"),
            ],
        )];

        let graph = transform(&apps);
        assert_eq!(graph.node("Interview").unwrap().occupancy_count, 1);
        let self_loop = graph
            .links
            .iter()
            .find(|l| l.source_index == l.target_index)
            .unwrap();
        assert_eq!(self_loop.weight, 1);
    }

    #[test]
    fn test_blank_channel_is_unknown() {
        let apps = vec![app(
            "a",
            "",
            &[("Applied", "2024-01-01"), ("Ghosted", "2024-02-01")],
        )];

        let graph = transform(&apps);
        assert_eq!(graph.links[0].channel, "Unknown");
    }

    #[test]
    fn test_stage_names_are_case_sensitive() {
        let apps = vec![
            app("a", "LinkedIn", &[("Interview", "2024-01-01")]),
            app("b", "LinkedIn", &[("interview", "2024-01-01")]),
        ];

        let graph = transform(&apps);
        assert_eq!(graph.nodes.len(), 2);
    }

    #[test]
    fn test_links_are_grouped_by_channel() {
        let stages = [("Applied", "2024-01-01"), ("Rejected", "2024-01-05")];
        let apps = vec![
            app("a", "Referral", &stages),
            app("b", "LinkedIn", &stages),
            app("c", "Referral", &[("Applied", "2024-01-01"), ("Offer", "2024-01-09")]),
        ];

        let graph = transform(&apps);
        let channels: Vec<&str> = graph.links.iter().map(|l| l.channel.as_str()).collect();
        assert_eq!(channels, vec!["LinkedIn", "Referral", "Referral"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let apps = vec![app(
            "a",
            "LinkedIn",
            &[("Applied", "2024-01-01"), ("Offer", "2024-02-01")],
        )];
        let json = serde_json::to_value(transform(&apps)).unwrap();
        assert_eq!(json["nodes"][0]["stageName"], "Applied");
        assert_eq!(json["nodes"][0]["occupancyCount"], 1);
        assert_eq!(json["links"][0]["sourceIndex"], 0);
        assert_eq!(json["links"][0]["targetIndex"], 1);
    }
}
