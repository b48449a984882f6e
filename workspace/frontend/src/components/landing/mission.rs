use yew::prelude::*;

struct Point {
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    accent: &'static str,
}

const POINTS: [Point; 3] = [
    Point {
        icon: "fas fa-bullseye",
        title: "Our Aim",
        subtitle: "Smart Agricultural Intelligence",
        description: "Build a decision-support platform that predicts crop yields from 25+ years of environmental, soil and agricultural data to empower informed farming decisions.",
        accent: "bg-[#37acd0]",
    },
    Point {
        icon: "fas fa-heart",
        title: "Our Motivation",
        subtitle: "Addressing Real Challenges",
        description: "Climate change, unpredictable weather and resource scarcity demand intelligent agricultural practices. We want to help secure India's food future through data-driven innovation.",
        accent: "bg-[#e26c52]",
    },
    Point {
        icon: "fas fa-chart-line",
        title: "Our Impact",
        subtitle: "Transforming Agriculture",
        description: "Help farmers maximize productivity and minimize losses, and give policymakers evidence for sustainable agricultural growth across India.",
        accent: "bg-[#99b83b]",
    },
];

const STATS: [(&str, &str); 3] = [("25+", "Years of Data"), ("29", "Indian States"), ("20+", "Major Crops")];

#[function_component(Mission)]
pub fn mission() -> Html {
    html! {
        <div class="py-20 px-6">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#956346] mb-4">{"Our Mission"}</h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-[#99b83b] to-[#37acd0] mx-auto rounded-full mb-6"></div>
                    <p class="text-xl text-[#956346]/80 max-w-3xl mx-auto">
                        {"Bridging traditional farming wisdom and modern data science for a sustainable agricultural future."}
                    </p>
                </div>

                <div class="grid gap-8 lg:grid-cols-3 mb-16">
                    {for POINTS.iter().map(|point| html! {
                        <div class="card bg-base-100 shadow-lg hover:shadow-2xl transition-shadow">
                            <div class="card-body">
                                <div class={classes!("w-14", "h-14", "rounded-xl", "flex", "items-center", "justify-center", "text-white", "text-2xl", point.accent)}>
                                    <i class={point.icon}></i>
                                </div>
                                <h3 class="text-2xl font-bold text-[#956346] mt-4">{point.title}</h3>
                                <h4 class="text-lg font-semibold text-[#37acd0]">{point.subtitle}</h4>
                                <p class="text-[#956346]/80 leading-relaxed">{point.description}</p>
                            </div>
                        </div>
                    })}
                </div>

                <div class="rounded-3xl p-8 md:p-12 text-white bg-gradient-to-r from-[#956346] to-[#37acd0]">
                    <h3 class="text-3xl font-bold text-center mb-8">{"Powered by Comprehensive Data"}</h3>
                    <div class="grid grid-cols-1 sm:grid-cols-3 gap-8 text-center">
                        {for STATS.iter().map(|(number, label)| html! {
                            <div>
                                <div class="text-4xl font-bold text-[#f8d662]">{*number}</div>
                                <div class="text-lg text-white/90">{*label}</div>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
