use yew::prelude::*;

struct Member {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    initials: &'static str,
    skills: &'static [&'static str],
}

const MEMBERS: [Member; 2] = [
    Member {
        name: "Sachi Singh",
        role: "Frontend Developer & UI/UX Designer",
        bio: "Creates farmer-friendly interfaces that make complex agricultural data accessible and actionable.",
        initials: "SS",
        skills: &["Agricultural UX", "Data Visualization", "Responsive Design"],
    },
    Member {
        name: "Agricultural Data Specialist",
        role: "Backend Developer & Data Scientist",
        bio: "Processes large agricultural datasets and builds the prediction models behind the yield analysis.",
        initials: "AD",
        skills: &["Machine Learning", "Agricultural Analytics", "API Development"],
    },
];

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <div class="py-20 px-6 bg-gradient-to-br from-[#99b83b]/10 via-white to-[#37acd0]/10">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#956346] mb-4">{"Meet Our Team"}</h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-[#99b83b] to-[#37acd0] mx-auto rounded-full mb-6"></div>
                    <p class="text-xl text-[#956346]/80">
                        {"Technologists dedicated to improving agriculture through innovation"}
                    </p>
                </div>
                <div class="grid gap-8 md:grid-cols-2">
                    {for MEMBERS.iter().map(|member| html! {
                        <div class="card bg-base-100 shadow-lg text-center">
                            <div class="card-body items-center">
                                <div class="avatar placeholder">
                                    <div class="w-24 rounded-full bg-gradient-to-r from-[#99b83b] to-[#37acd0] text-white">
                                        <span class="text-3xl">{member.initials}</span>
                                    </div>
                                </div>
                                <h3 class="text-2xl font-semibold text-[#956346] mt-4">{member.name}</h3>
                                <p class="text-[#37acd0] font-medium">{member.role}</p>
                                <p class="text-sm text-[#956346]/70">{member.bio}</p>
                                <div class="flex flex-wrap justify-center gap-2 mt-2">
                                    {for member.skills.iter().map(|skill| html! {
                                        <span class="badge badge-outline">{*skill}</span>
                                    })}
                                </div>
                            </div>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
