//! The bundled portfolio content.
//!
//! Pure data, no logic. Chart data files referenced here live under
//! `assets/data/`; figure images under `assets/images/`. A referenced image
//! that is missing from disk renders as a placeholder, and a visualization
//! kind with no renderer is skipped, so this file can be edited freely
//! without breaking pages.

use super::*;

fn s(value: &str) -> String {
    value.to_string()
}

/// All projects, in listing order.
pub fn projects() -> Vec<Project> {
    vec![vae_gan(), protein_folding(), mrna_expression()]
}

fn vae_gan() -> Project {
    Project {
        id: s("vae-gan"),
        title: s("VAE-GAN for Grayscale Image Colorization"),
        short_description: s(
            "A variational autoencoder and generative adversarial network hybrid \
             model for colorizing grayscale images.",
        ),
        full_description: s(
            "Advanced machine learning architecture combining VAEs and GANs with \
             Wasserstein loss and skip connections for realistic image colorization.",
        ),
        abstract_text: Some(s(
            "This work aims to advance colorization of grayscale images by improving \
             realism, diversity and colorfulness. We train a model that combines a \
             Variational Auto-Encoder with a Generative Adversarial Network, \
             implementing skip connections and Wasserstein loss to improve realism \
             and training stability. Enhancing the base model this way results in a \
             23.7% higher Inception Score.",
        )),
        github_url: Some(s("https://github.com/advel/vae-gan")),
        start_date: s("2024-01-15"),
        end_date: Some(s("2024-06-30")),
        status: ProjectStatus::Completed,
        category: Category::MachineLearning,
        tags: vec![
            s("Machine Learning"),
            s("Computer Vision"),
            s("GANs"),
            s("VAE"),
            s("Deep Learning"),
        ],
        key_features: vec![
            s("VAE-GAN hybrid architecture for image colorization"),
            s("Wasserstein loss for improved training stability"),
            s("Skip connections for better feature preservation"),
            s("PatchGAN discriminator for high-frequency detail enforcement"),
            s("Perceptual evaluation with 36.6% human fool rate"),
        ],
        show_toc: true,
        sections: vec![
            Section {
                id: s("problem-statement"),
                title: s("Problem Statement"),
                order: 1,
                content: SectionContent {
                    text: Some(s(
                        "Colorization of grayscale images is a difficult but impactful \
                         task in computer vision. The task involves producing believable \
                         color information such that a recipient is compelled into \
                         accepting the artificially colorized image as real. Fully \
                         autonomous methods face challenges including unstable training, \
                         visual artifacts, reduced saturation, and lack of diversity in \
                         produced colors.",
                    )),
                    subsections: vec![SubSection {
                        id: s("challenges"),
                        title: s("Key Challenges"),
                        body: s(
                            "Autonomous colorization models must overcome several \
                             technical hurdles: maintaining training stability in \
                             adversarial networks, producing realistic colors that fool \
                             human perception, ensuring diverse colorizations rather \
                             than mode collapse, and avoiding desaturated patches and \
                             chromatic noise.",
                        ),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            },
            Section {
                id: s("technical-approach"),
                title: s("Technical Approach"),
                order: 2,
                content: SectionContent {
                    text: Some(s(
                        "Our approach combines a Variational Auto-Encoder as the \
                         generator within a GAN framework, enhanced with skip \
                         connections and Wasserstein loss for improved stability and \
                         realism.",
                    )),
                    figures: vec![Figure {
                        id: s("architecture"),
                        src: s("assets/images/vae_gan/model_architecture.png"),
                        alt: s("VAE-GAN architecture diagram"),
                        caption: Some(s(
                            "Complete model architecture showing the VAE encoder-decoder \
                             with skip connections and the PatchGAN discriminator.",
                        )),
                    }],
                    subsections: vec![
                        SubSection {
                            id: s("vae-theory"),
                            title: s("Variational Auto-Encoder Foundation"),
                            body: s(
                                "A VAE encodes inputs into a probabilistic latent \
                                 distribution parameterized by mean and standard \
                                 deviation. The reparameterization trick enables \
                                 gradient-based optimization:",
                            ),
                            math: vec![MathEquation {
                                id: s("reparam-trick"),
                                latex: s(
                                    r"z = \mu + \sigma \epsilon, \quad \epsilon \sim \mathcal{N}(0, 1)",
                                ),
                                description: Some(s(
                                    "Reparameterization trick for sampling from the latent \
                                     distribution",
                                )),
                                display: true,
                                ..Default::default()
                            }],
                            ..Default::default()
                        },
                        SubSection {
                            id: s("vae-loss"),
                            title: s("VAE Objective Function"),
                            body: s(
                                "The VAE optimizes a combination of reconstruction \
                                 accuracy and latent space regularization:",
                            ),
                            math: vec![MathEquation {
                                id: s("vae-loss"),
                                latex: s(
                                    r"\mathcal{L}_{\text{VAE}} = -\mathbb{E}_{q(z|x)} [\log p(x|z)] + D_{\text{KL}}(q(z|x) \| p(z))",
                                ),
                                description: Some(s(
                                    "VAE loss with reconstruction and KL divergence terms",
                                )),
                                display: true,
                                ..Default::default()
                            }],
                            ..Default::default()
                        },
                        SubSection {
                            id: s("wasserstein-loss"),
                            title: s("Wasserstein Loss"),
                            body: s(
                                "Traditional GAN training suffers from gradient \
                                 saturation. Wasserstein loss reformulates the \
                                 discriminator as a critic that outputs real-valued \
                                 scores, approximating the Earth-Mover distance between \
                                 real and generated distributions.",
                            ),
                            math: vec![
                                MathEquation {
                                    id: s("wasserstein"),
                                    latex: s(r"\mathcal{L}_D = D(x) - D(G(z))"),
                                    description: Some(s("Wasserstein critic loss")),
                                    display: false,
                                    ..Default::default()
                                },
                                MathEquation {
                                    id: s("generator-loss"),
                                    latex: s(r"\mathcal{L}_G = D(G(z))"),
                                    description: Some(s(
                                        "Generator loss under the Wasserstein formulation",
                                    )),
                                    display: false,
                                    ..Default::default()
                                },
                            ],
                            ..Default::default()
                        },
                    ],
                    ..Default::default()
                },
            },
            Section {
                id: s("results"),
                title: s("Results & Evaluation"),
                order: 3,
                content: SectionContent {
                    text: Some(s(
                        "The model was evaluated with quantitative metrics and a \
                         perceptual study with human subjects. The results demonstrate \
                         significant improvements over the baseline.",
                    )),
                    metrics: vec![
                        Metric {
                            name: s("Inception Score"),
                            value: s("20.01"),
                            description: Some(s(
                                "Measures quality and diversity of generated images",
                            )),
                            comparison: Some(MetricComparison {
                                baseline: s("16.17"),
                                improvement: s("23.7%"),
                            }),
                        },
                        Metric {
                            name: s("Human Fool Rate"),
                            value: s("36.6%"),
                            description: Some(s(
                                "Share of participants who labeled a generated image as real",
                            )),
                            comparison: None,
                        },
                        Metric {
                            name: s("Validation L1 Loss"),
                            value: s("0.058"),
                            description: Some(s("Reconstruction error on held-out images")),
                            comparison: None,
                        },
                    ],
                    visualizations: vec![
                        Visualization::ComparisonTable(ComparisonTableData {
                            title: s("Perceptual Study Sample Results"),
                            items: vec![
                                comparison_item("16", "17.6%"),
                                comparison_item("17", "64.7%"),
                                comparison_item("14", "47.1%"),
                                comparison_item("37", "52.9%"),
                                comparison_item("39", "23.5%"),
                                comparison_item("47", "29.4%"),
                            ],
                            caption: Some(s(
                                "Hand-picked examples from the perceptual study showing \
                                 the percentage of participants who incorrectly labeled \
                                 the generated image as real. Higher percentages indicate \
                                 more realistic colorizations.",
                            )),
                        }),
                        Visualization::TrainingChart(TrainingChartData {
                            title: s("Training Stability: Enhanced Model vs Baseline"),
                            charts: vec![
                                SubChart {
                                    title: s("Enhanced Model (Ours)"),
                                    data_path: s("assets/data/vae_gan/training_data.dat"),
                                    lines: training_lines(),
                                },
                                SubChart {
                                    title: s("Basic VAE-GAN Model"),
                                    data_path: s("assets/data/vae_gan/training_data_basic.dat"),
                                    lines: training_lines(),
                                },
                            ],
                            caption: Some(s(
                                "Training curves comparing the enhanced model (left) with \
                                 the baseline VAE-GAN (right). The enhanced model shows \
                                 significantly more stable convergence with fewer \
                                 oscillations.",
                            )),
                        }),
                        Visualization::Histogram(HistogramData {
                            title: s("Hue Distribution: Generated vs Ground Truth"),
                            data_path: s("assets/data/vae_gan/histogram_sample_40.dat"),
                            caption: Some(s(
                                "Comparison of hue distributions between ground truth \
                                 images and multiple generated samples. The model produces \
                                 consistent but limited color diversity across generation \
                                 attempts.",
                            )),
                        }),
                    ],
                    ..Default::default()
                },
            },
        ],
    }
}

fn comparison_item(id: &str, percentage: &str) -> ComparisonItem {
    ComparisonItem {
        id: s(id),
        original_image: format!("assets/images/vae_gan/samples/original_{id}.png"),
        generated_image: format!("assets/images/vae_gan/samples/generated_{id}.png"),
        percentage: s(percentage),
    }
}

fn training_lines() -> Vec<LineSpec> {
    vec![
        LineSpec::new("AVG_IS", "Inception Score", [239, 68, 68]).width(3.0),
        LineSpec::new("Val_L1_loss", "Reconstruction Loss", [51, 255, 0])
            .width(3.0)
            .dashed(),
        LineSpec::new("D_loss", "Discriminator Loss", [249, 115, 22]),
        LineSpec::new("G_loss", "Generator Loss", [20, 184, 166]),
    ]
}

fn protein_folding() -> Project {
    Project {
        id: s("aco-protein-folding"),
        title: s("Ant Colony Optimization for Protein Folding"),
        short_description: s(
            "An ant colony optimization solver for the 2D HP lattice protein \
             folding model, benchmarked against known optima.",
        ),
        full_description: s(
            "Stochastic combinatorial optimization applied to the HP model of \
             protein folding, with pheromone-guided construction and local search.",
        ),
        abstract_text: Some(s(
            "The hydrophobic-polar lattice model reduces protein folding to placing \
             a binary sequence on a lattice such that hydrophobic contacts are \
             maximized. We apply ant colony optimization with a local search phase \
             and compare against published optimal scores on standard benchmark \
             sequences, reaching 30-50% of optimal contact counts on long sequences.",
        )),
        github_url: Some(s("https://github.com/advel/aco-folding")),
        start_date: s("2023-09-01"),
        end_date: Some(s("2023-12-20")),
        status: ProjectStatus::Completed,
        category: Category::Bioinformatics,
        tags: vec![
            s("Bioinformatics"),
            s("Optimization"),
            s("Ant Colony"),
            s("Algorithms"),
        ],
        key_features: vec![
            s("Pheromone-guided conformation construction"),
            s("Greedy local search refinement phase"),
            s("Benchmark harness against published optima"),
        ],
        show_toc: false,
        sections: vec![
            Section {
                id: s("method"),
                title: s("Method"),
                order: 1,
                content: SectionContent {
                    text: Some(s(
                        "Each ant builds a self-avoiding walk on the lattice, choosing \
                         relative moves with probability proportional to pheromone \
                         weight and a greedy heuristic counting new hydrophobic \
                         contacts. After each generation the best conformations \
                         deposit pheromone; evaporation keeps the search from \
                         collapsing onto early local optima.",
                    )),
                    code: vec![CodeBlock {
                        id: s("transition-rule"),
                        language: s("python"),
                        code: s(
                            "def pick_move(pheromone, heuristic, alpha, beta):\n    \
                             weights = [\n        (tau ** alpha) * (eta ** beta)\n        \
                             for tau, eta in zip(pheromone, heuristic)\n    ]\n    \
                             total = sum(weights)\n    \
                             return sample(range(len(weights)), [w / total for w in weights])",
                        ),
                        description: Some(s("Move selection during construction")),
                    }],
                    ..Default::default()
                },
            },
            Section {
                id: s("benchmarks"),
                title: s("Benchmark Results"),
                order: 2,
                content: SectionContent {
                    text: Some(s(
                        "Scores on the standard 2D HP benchmark set. The percent column \
                         reports the fraction of the published optimal contact count \
                         reached by the ACO solver.",
                    )),
                    visualizations: vec![
                        Visualization::BenchmarkTable(BenchmarkTableData {
                            title: Some(s("2D HP Benchmark Sequences")),
                            rows: vec![
                                BenchmarkRow {
                                    id: s("S1-20"),
                                    length: 20,
                                    optimal: -9.0,
                                    aco: -9.0,
                                    hart: -6.0,
                                },
                                BenchmarkRow {
                                    id: s("S2-24"),
                                    length: 24,
                                    optimal: -9.0,
                                    aco: -8.0,
                                    hart: -5.0,
                                },
                                BenchmarkRow {
                                    id: s("S3-36"),
                                    length: 36,
                                    optimal: -14.0,
                                    aco: -12.0,
                                    hart: -7.0,
                                },
                                BenchmarkRow {
                                    id: s("S4-48"),
                                    length: 48,
                                    optimal: -23.0,
                                    aco: -17.0,
                                    hart: -9.0,
                                },
                                BenchmarkRow {
                                    id: s("S5-64"),
                                    length: 64,
                                    optimal: -42.0,
                                    aco: -25.0,
                                    hart: -12.0,
                                },
                            ],
                            caption: Some(s(
                                "ACO scores versus published optima and the Hart-Istrail \
                                 approximation baseline. Negative scores count hydrophobic \
                                 contacts.",
                            )),
                        }),
                        Visualization::PerformanceChart(PerformanceChartData {
                            title: Some(s("Convergence Behaviour")),
                            image: s("assets/images/aco/convergence.png"),
                            caption: Some(s(
                                "Best score per generation, averaged over 20 runs of the \
                                 64-residue sequence. Local search accounts for most of \
                                 the improvement after generation 50.",
                            )),
                        }),
                    ],
                    ..Default::default()
                },
            },
        ],
    }
}

fn mrna_expression() -> Project {
    Project {
        id: s("mrna-expression"),
        title: s("mRNA Expression Prediction with Deep Learning"),
        short_description: s(
            "Predicting mRNA expression levels from DNA sequence using CNNs and \
             graph neural networks.",
        ),
        full_description: s(
            "Master's thesis work evaluating sequence-based deep learning models \
             for mRNA expression prediction, with replicable data pipelines for \
             biological data processing.",
        ),
        abstract_text: Some(s(
            "We evaluate sequence-based deep learning models for predicting mRNA \
             expression levels, design convolutional and graph neural architectures \
             for DNA input, and experiment with transformer embeddings for \
             long-range dependencies. A fully replicable ETL pipeline covers data \
             acquisition through model evaluation.",
        )),
        github_url: None,
        start_date: s("2025-01"),
        end_date: Some(s("2025-06")),
        status: ProjectStatus::Completed,
        category: Category::Bioinformatics,
        tags: vec![
            s("Bioinformatics"),
            s("Deep Learning"),
            s("Graph Neural Networks"),
            s("Transformers"),
        ],
        key_features: vec![
            s("CNN and GNN architectures for DNA sequence input"),
            s("Transformer embeddings for long-range dependencies"),
            s("Fully replicable ETL pipeline for biological data"),
        ],
        show_toc: true,
        sections: vec![
            Section {
                id: s("models"),
                title: s("Model Architectures"),
                order: 1,
                content: SectionContent {
                    text: Some(s(
                        "Three families of models were evaluated: convolutional networks \
                         over one-hot encoded sequence windows, graph neural networks \
                         over predicted secondary structure, and transformer embeddings \
                         fine-tuned for the regression target.",
                    )),
                    ..Default::default()
                },
            },
            Section {
                id: s("evaluation"),
                title: s("Evaluation"),
                order: 2,
                content: SectionContent {
                    text: Some(s(
                        "Model comparison across species and the learning-curve study \
                         are pending the interactive renderers below; the write-up text \
                         summarizes the outcomes in the meantime.",
                    )),
                    // Authored ahead of their renderers; the dispatcher skips
                    // these until a build knows the kinds.
                    visualizations: vec![
                        Visualization::Unsupported {
                            kind: s("model-comparison"),
                        },
                        Visualization::Unsupported {
                            kind: s("species-comparison"),
                        },
                        Visualization::Unsupported {
                            kind: s("learning-curves"),
                        },
                    ],
                    ..Default::default()
                },
            },
        ],
    }
}

/// Resume entries, most recent first.
pub fn experience() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem {
            id: s("vis-commodities"),
            position: s("Software Developer"),
            company: s("Vis Commodities"),
            start_date: s("2024-11"),
            end_date: Some(s("2025-10")),
            description: s(
                "Full-stack development and DevOps role focusing on ETL pipelines, \
                 cloud infrastructure, and analytics tools. Built Azure-based \
                 solutions including Kubernetes clusters.",
            ),
            technologies: vec![
                s("Python"),
                s("React"),
                s("Azure"),
                s("Kubernetes"),
                s("Docker"),
                s("TimescaleDB"),
            ],
            achievements: vec![
                s("Set up ETL pipelines with Kubernetes, Helm, Dagster, and TimescaleDB on Azure"),
                s("Managed the AKS cluster, including CI/CD pipelines for other developers"),
                s("Created a trading analytics tool using React and Python on Azure web apps"),
                s("Implemented energy market data scrapers for European data providers"),
                s("Worked with RabbitMQ to retrieve trades from the exchange"),
            ],
        },
        ExperienceItem {
            id: s("mft-energy"),
            position: s("Junior Software Developer"),
            company: s("MFT Energy A/S"),
            start_date: s("2022-11"),
            end_date: Some(s("2024-11")),
            description: s(
                "Full-stack development role focusing on energy trading systems and \
                 data processing: ETL processes, trading platform integrations, and \
                 Excel add-ins for traders.",
            ),
            technologies: vec![
                s("C#"),
                s("React"),
                s("Azure Functions"),
                s("EF Core"),
                s("MSSQL"),
                s("Python"),
            ],
            achievements: vec![
                s("Developed ETL processes using Azure Functions and EF Core with MSSQL"),
                s("Built full-stack applications integrating REST/SOAP APIs and web scraping"),
                s("Created Excel add-ins in React and C# enabling spreadsheet-based trading"),
                s("Maintained and deployed applications on the Azure cloud platform"),
            ],
        },
        ExperienceItem {
            id: s("msc-thesis"),
            position: s("Master's Thesis: mRNA Expression Prediction"),
            company: s("Aarhus University"),
            start_date: s("2025-01"),
            end_date: Some(s("2025-06")),
            description: s(
                "Research project on predicting mRNA expression levels using deep \
                 learning. Evaluated sequence-based models, designed CNNs and graph \
                 neural networks, and created replicable pipelines for biological \
                 data processing. Achieved grade 12.",
            ),
            technologies: vec![
                s("PyTorch"),
                s("Python"),
                s("Deep Learning"),
                s("Bioinformatics"),
            ],
            achievements: vec![
                s("Designed CNNs and graph neural networks for DNA-based expression prediction"),
                s("Created a fully replicable ETL pipeline for biological data preprocessing"),
                s("Experimented with transformer embeddings for long-range dependencies"),
            ],
        },
        ExperienceItem {
            id: s("bsc-thesis"),
            position: s("Bachelor's Thesis: Shortest Path on OSM Data"),
            company: s("Aarhus University"),
            start_date: s("2023-01"),
            end_date: Some(s("2023-06")),
            description: s(
                "Research on optimizing shortest path computations over OpenStreetMap \
                 data. Implemented and compared Dijkstra, A* and ALT with various \
                 enhancements, with an interactive visualization across Europe. \
                 Achieved grade 10.",
            ),
            technologies: vec![
                s("Python"),
                s("Java"),
                s("PostgreSQL"),
                s("PostGIS"),
                s("React"),
            ],
            achievements: vec![
                s("Implemented and optimized shortest path algorithms (Dijkstra, A*, ALT)"),
                s("Enhanced algorithms with shortcuts and space-filling curves"),
                s("Managed geographical data using PostgreSQL and PostGIS"),
            ],
        },
    ]
}
