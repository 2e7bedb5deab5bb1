use serde_json::{Value, json};

pub fn metadata() -> Value {
    json!({
        "title": "Regional Broadband Expansion",
        "subtitle": "Technical and Management Proposal",
        "companyName": "Northwind Networks",
        "companyAddress": "100 Fiber Way, Columbus, OH",
        "clientName": "Ohio Department of Development",
        "date": "2026-04-15"
    })
}

/// One section: a "Scope" heading followed by a paragraph with one bold word.
pub fn scope_proposal() -> Value {
    json!({
        "metadata": metadata(),
        "sections": [{
            "title": "Scope",
            "sectionNumber": "1",
            "content": [
                { "type": "heading", "level": 1, "text": "Scope" },
                { "type": "paragraph", "text": "We will **deliver** on time." }
            ]
        }]
    })
}

/// Every block kind, a header, a footer and a compliance checklist.
pub fn full_proposal() -> Value {
    json!({
        "metadata": metadata(),
        "formatting": {
            "pageSize": "A4",
            "headerText": "Northwind Networks | Confidential",
            "footerText": "Proposal for ODOD",
            "includePageNumbers": true,
            "includeToc": true
        },
        "sections": [
            {
                "title": "Executive Summary",
                "sectionNumber": "1",
                "content": [
                    { "type": "paragraph", "text": "Northwind brings *ten years* of **rural fiber** experience." },
                    { "type": "placeholder", "placeholderTier": "REQUIRED", "text": "Insert bonding capacity" }
                ]
            },
            {
                "title": "Technical Approach",
                "sectionNumber": "2",
                "content": [
                    { "type": "heading", "level": 2, "text": "Network Design" },
                    { "type": "bullet_list", "items": ["Ring topology", "Redundant uplinks"] },
                    { "type": "bullet_list", "level": 2, "items": ["Diverse paths"] },
                    { "type": "numbered_list", "items": ["Survey", "Build", "Light"] },
                    { "type": "table", "rows": [["Phase", "Months"], ["Survey", "3"], ["Build", "12"]] },
                    { "type": "placeholder", "text": "Add route map" },
                    { "type": "placeholder", "placeholderTier": "OPTIONAL", "text": "Customer quotes" }
                ]
            }
        ],
        "complianceChecklist": {
            "items": [
                {
                    "rfpRef": "L.3.1",
                    "requirement": "Describe network topology",
                    "proposalSection": "2",
                    "status": "COMPLIANT"
                },
                {
                    "rfpRef": "L.3.2",
                    "requirement": "Provide bonding letter",
                    "proposalSection": "1",
                    "status": "PARTIAL",
                    "notes": "Letter pending from surety"
                }
            ]
        }
    })
}

pub fn matrix_metadata() -> Value {
    json!({
        "rfpTitle": "Regional Broadband Expansion RFP",
        "rfpReference": "ODOD-2026-014",
        "proposalTitle": "Regional Broadband Expansion",
        "companyName": "Northwind Networks",
        "clientName": "Ohio Department of Development",
        "date": "2026-04-15"
    })
}

fn section(number: &str, title: &str) -> Value {
    json!({ "sectionNumber": number, "title": title })
}

/// Three rows; the second is an unaddressed gap with no proposal section.
pub fn gap_matrix() -> Value {
    json!({
        "metadata": matrix_metadata(),
        "rows": [
            {
                "rfpSection": section("L.3.1", "Network Topology"),
                "proposalSection": { "sectionNumber": "2", "title": "Technical Approach", "pageNumber": 7 },
                "description": "Describe the proposed network topology",
                "coverageStatus": "FULLY_ADDRESSED"
            },
            {
                "rfpSection": section("L.3.2", "Bonding"),
                "description": "Provide a bonding letter",
                "coverageStatus": "NOT_ADDRESSED",
                "notes": "Awaiting surety"
            },
            {
                "rfpSection": section("L.3.3", "Schedule"),
                "proposalSection": section("3", "Schedule"),
                "description": "Provide an integrated master schedule",
                "coverageStatus": "PARTIALLY_ADDRESSED"
            }
        ]
    })
}
