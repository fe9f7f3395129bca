use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that generates a companion `*Timeseries` struct for collecting
/// per-day water-balance records. All fields in the source struct must be `f64`.
///
/// The generated timeseries struct holds one `Vec<chrono::NaiveDate>` date
/// column plus a `Vec<f64>` per source field, along with `with_capacity`,
/// `push(date, &record)`, `len`, `is_empty`, `column_names`, and
/// `to_delimited` methods. The records are insertion-ordered and append-only;
/// `to_delimited` renders the whole table with a header row, date first.
/// A `field_names()` associated function is also added to the record struct.
///
/// Use `#[fluxes(timeseries_name = "CustomName")]` to override the default
/// timeseries struct name (`{StructName}Timeseries`).
#[proc_macro_derive(Fluxes, attributes(fluxes))]
pub fn derive_fluxes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let ts_name = extract_timeseries_name(&input)
        .unwrap_or_else(|| format_ident!("{}Timeseries", name));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Fluxes can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Fluxes can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Fluxes struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut field_names = Vec::new();
    let mut field_idents = Vec::new();
    for field in fields {
        let ident = field.ident.as_ref().unwrap();
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(
                &field.ty,
                "Fluxes derive: all fields must be f64",
            )
            .to_compile_error()
            .into();
        }
        field_names.push(ident.to_string());
        field_idents.push(ident);
    }

    let field_name_strs: Vec<&str> = field_names.iter().map(|s| s.as_str()).collect();

    let ts_fields = field_idents.iter().map(|f| {
        quote! { pub #f: Vec<f64> }
    });

    let with_cap_fields = field_idents.iter().map(|f| {
        quote! { #f: Vec::with_capacity(n) }
    });

    let push_fields = field_idents.iter().map(|f| {
        quote! { self.#f.push(record.#f); }
    });

    let row_fields = field_idents.iter().map(|f| {
        quote! {
            row.push(sep);
            row.push_str(&self.#f[i].to_string());
        }
    });

    let expanded = quote! {
        /// Auto-generated date-keyed table collecting one record per simulated day.
        #[derive(Debug)]
        pub struct #ts_name {
            pub date: Vec<::chrono::NaiveDate>,
            #(#ts_fields,)*
        }

        impl #ts_name {
            /// Pre-allocate all columns for `n` days.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    date: Vec::with_capacity(n),
                    #(#with_cap_fields,)*
                }
            }

            /// Append one finalized daily record.
            pub fn push(&mut self, date: ::chrono::NaiveDate, record: &#name) {
                self.date.push(date);
                #(#push_fields)*
            }

            /// Number of days recorded.
            pub fn len(&self) -> usize {
                self.date.len()
            }

            /// Returns `true` if no days have been recorded.
            pub fn is_empty(&self) -> bool {
                self.date.is_empty()
            }

            /// Column names in output order, `date` first.
            pub fn column_names() -> &'static [&'static str] {
                &["date", #(#field_name_strs),*]
            }

            /// Render the table as delimited text with a header row.
            pub fn to_delimited(&self, sep: char) -> String {
                let mut out = String::new();
                out.push_str(&Self::column_names().join(&sep.to_string()));
                out.push('\n');
                for i in 0..self.len() {
                    let mut row = String::new();
                    row.push_str(&self.date[i].to_string());
                    #(#row_fields)*
                    out.push_str(&row);
                    out.push('\n');
                }
                out
            }
        }

        impl #name {
            /// Returns the field names of this record struct.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#field_name_strs),*]
            }
        }
    };

    expanded.into()
}

fn extract_timeseries_name(input: &DeriveInput) -> Option<proc_macro2::Ident> {
    for attr in &input.attrs {
        if attr.path().is_ident("fluxes") {
            let nested = attr
                .parse_args_with(
                    syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
                )
                .ok()?;
            for meta in nested {
                if let Meta::NameValue(nv) = meta {
                    if nv.path.is_ident("timeseries_name") {
                        if let syn::Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                return Some(format_ident!("{}", lit_str.value()));
                            }
                        }
                    }
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
